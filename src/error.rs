use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions. The `Display` text is what the user sees before exit.
#[derive(Debug, Error)]
pub enum Error {
    #[error("User home directory was not found")]
    HomeNotFound,

    #[error("Unable to create home sequential directory")]
    CreateDataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create file {}", name_of(.path))]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading file {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing to file {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unexpected error: {0}")]
    Terminal(#[from] io::Error),
}

fn name_of(path: &std::path::Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_failure_names_only_the_file() {
        let err = Error::OpenFile {
            path: PathBuf::from("/home/someone/.sequential/current.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Cannot create file current.txt");
    }

    #[test]
    fn terminal_errors_are_prefixed() {
        let err = Error::from(io::Error::other("boom"));
        assert_eq!(err.to_string(), "Unexpected error: boom");
    }
}
