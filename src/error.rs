//! Error types for the init flow.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while collecting answers or writing `tsconfig.json`.
#[derive(Debug, Error)]
pub enum InitError {
    /// The user aborted one of the prompts.
    ///
    /// Not a failure: callers report it and exit successfully.
    #[error("Operation cancelled")]
    Cancelled,

    /// The project directory could not be created.
    #[error("Failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `tsconfig.json` could not be written.
    #[error("Failed to write {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize tsconfig")]
    Serialize(#[from] serde_json::Error),

    /// The terminal failed for a reason other than an interrupt.
    #[error("Prompt failed")]
    Prompt(#[source] dialoguer::Error),
}

impl From<dialoguer::Error> for InitError {
    /// Ctrl-C surfaces as an interrupted read and counts as cancellation.
    fn from(err: dialoguer::Error) -> Self {
        #[allow(unreachable_patterns)]
        let interrupted = match &err {
            dialoguer::Error::IO(io_err) => io_err.kind() == io::ErrorKind::Interrupted,
            _ => false,
        };

        if interrupted {
            InitError::Cancelled
        } else {
            InitError::Prompt(err)
        }
    }
}

impl InitError {
    /// Whether this error came from creating the project directory or writing the file
    pub fn is_file_error(&self) -> bool {
        matches!(self, InitError::CreateDir { .. } | InitError::WriteFile { .. })
    }
}

/// Message printed to stderr for a failed run.
///
/// Only filesystem failures get the "Error creating project files" prefix.
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<InitError>() {
        Some(init_err) if init_err.is_file_error() => {
            format!("Error creating project files: {:#}", err)
        }
        _ => format!("{:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_maps_to_cancelled() {
        let err: InitError =
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "read interrupted"))
                .into();
        assert!(matches!(err, InitError::Cancelled));
    }

    #[test]
    fn test_other_io_error_maps_to_prompt() {
        let err: InitError =
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::NotConnected, "not a terminal"))
                .into();
        assert!(matches!(err, InitError::Prompt(_)));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("not a terminal"));
    }

    #[test]
    fn test_create_dir_message_names_path() {
        let err = InitError::CreateDir {
            path: PathBuf::from("/tmp/blocked/app"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "file exists"),
        };
        assert_eq!(err.to_string(), "Failed to create directory /tmp/blocked/app");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "file exists");
    }

    #[test]
    fn test_file_errors_get_project_files_prefix() {
        let err = anyhow::Error::new(InitError::WriteFile {
            path: PathBuf::from("/work/app/tsconfig.json"),
            source: io::Error::new(io::ErrorKind::Other, "is a directory"),
        });
        assert_eq!(
            failure_message(&err),
            "Error creating project files: Failed to write /work/app/tsconfig.json: is a directory"
        );
    }

    #[test]
    fn test_prompt_errors_have_no_project_files_prefix() {
        let err = anyhow::Error::new(InitError::from(dialoguer::Error::IO(io::Error::new(
            io::ErrorKind::NotConnected,
            "not a terminal",
        ))));
        let message = failure_message(&err);
        assert!(message.starts_with("Prompt failed"), "got {}", message);
        assert!(!message.contains("Error creating project files"));
    }

    #[test]
    fn test_context_errors_reported_as_is() {
        let err = anyhow::anyhow!("Failed to determine current directory");
        assert_eq!(failure_message(&err), "Failed to determine current directory");
    }
}
