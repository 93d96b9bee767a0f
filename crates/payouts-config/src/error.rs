use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures reading or writing the preferences file, tagged with the path involved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("preferences at {} are not valid JSON: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
}

impl ConfigError {
    pub(crate) fn access(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> ConfigError {
        let path = path.into();
        move |source| ConfigError::Access { path, source }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Access { path, .. } | ConfigError::Malformed { path, .. } => path,
        }
    }
}
