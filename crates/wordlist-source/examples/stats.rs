use std::collections::{BTreeMap, HashSet};
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use wordlist_source::{LineSource, LoadMode};

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p wordlist-source --example stats -- <path-to-word-list>")?;

    let source = LineSource::load_with_mode(&path, LoadMode::Mmap)
        .with_context(|| format!("loading word list from {}", path.display()))?;

    let mut distinct = HashSet::new();
    let mut by_len: BTreeMap<usize, usize> = BTreeMap::new();
    let mut blank = 0usize;
    for line in source.lines() {
        if line.is_empty() {
            blank += 1;
        }
        distinct.insert(line);
        *by_len.entry(line.chars().count()).or_default() += 1;
    }

    println!("File        : {}", path.display());
    println!("Bytes       : {}", source.byte_len());
    println!("Lines       : {}", source.line_count());
    println!("Distinct    : {}", distinct.len());
    println!("Blank lines : {}", blank);
    for (len, count) in by_len {
        println!("  length {len:>3}: {count}");
    }

    Ok(())
}
