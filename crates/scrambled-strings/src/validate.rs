use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a path argument was rejected. The leading word is the check that failed.
#[derive(Debug, Error)]
pub enum PathProblem {
    #[error("required: no path given")]
    Empty,
    #[error("file: {} does not exist", .0.display())]
    Missing(PathBuf),
    #[error("file: {} is not a regular file", .0.display())]
    NotAFile(PathBuf),
    #[error("readable: {}: {}", .0.display(), .1)]
    Unreadable(PathBuf, io::Error),
}

impl PathProblem {
    /// Short name of the failed check: `required`, `file` or `readable`.
    pub fn tag(&self) -> &'static str {
        match self {
            PathProblem::Empty => "required",
            PathProblem::Missing(_) | PathProblem::NotAFile(_) => "file",
            PathProblem::Unreadable(..) => "readable",
        }
    }
}

/// A rejected path argument, naming which argument is wrong.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("dictionary file validation failed: {0}")]
    Dictionary(PathProblem),
    #[error("input file validation failed: {0}")]
    Input(PathProblem),
}

impl ValidationError {
    pub fn problem(&self) -> &PathProblem {
        match self {
            ValidationError::Dictionary(problem) | ValidationError::Input(problem) => problem,
        }
    }
}

/// Check both paths, dictionary first, so a run never starts on bad arguments.
pub fn validate_args(dictionary: &Path, input: &Path) -> Result<(), ValidationError> {
    check_file(dictionary).map_err(ValidationError::Dictionary)?;
    check_file(input).map_err(ValidationError::Input)?;
    Ok(())
}

fn check_file(path: &Path) -> Result<(), PathProblem> {
    if path.as_os_str().is_empty() {
        return Err(PathProblem::Empty);
    }
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(PathProblem::Missing(path.to_path_buf()));
        }
        Err(err) => return Err(PathProblem::Unreadable(path.to_path_buf(), err)),
    };
    if !metadata.is_file() {
        return Err(PathProblem::NotAFile(path.to_path_buf()));
    }
    File::open(path).map_err(|err| PathProblem::Unreadable(path.to_path_buf(), err))?;
    Ok(())
}
