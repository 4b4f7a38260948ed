use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RotateError {
    #[error("no candidate image in directory {}", .0.display())]
    NoCandidateImage(PathBuf),

    #[error("image source {} is neither a file nor a directory", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start {tool}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with {status}")]
    DisplayFailed { tool: String, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, RotateError>;
