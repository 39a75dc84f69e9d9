//! Error types for scaffolding runs

use crate::registry::{Chain, WalletProvider};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can stop a scaffolding run
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid project name \"{name}\".\n  {}", .problems.join("\n  "))]
    InvalidName { name: String, problems: Vec<String> },

    #[error(
        "{} doesn't support {}.\n  Available providers for {}: {}",
        .provider.display_name(),
        .chain.display_name(),
        .chain.display_name(),
        .chain.provider_ids().join(", ")
    )]
    IncompatibleProvider {
        provider: WalletProvider,
        chain: Chain,
    },

    #[error("The directory {} is not writable.\n  Please check your permissions and try again.", .0.display())]
    NotWritable(PathBuf),

    #[error("Directory {name} contains files that could conflict:\n  {}", summarize_conflicts(.conflicts))]
    Conflicts { name: String, conflicts: Vec<String> },

    #[error("Template not found at {}\n  {hint}", .path.display())]
    TemplateNotFound { path: PathBuf, hint: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected package.json layout in {}: {reason}", .path.display())]
    ManifestShape { path: PathBuf, reason: String },
}

/// Broad failure category used to pick the message shown for generation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    PermissionDenied,
    DiskFull,
    NotFound,
    Other,
}

impl ScaffoldError {
    /// Attach a path to an I/O error
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { source, .. } => match source.kind() {
                io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                    ErrorCategory::PermissionDenied
                }
                io::ErrorKind::StorageFull => ErrorCategory::DiskFull,
                io::ErrorKind::NotFound => ErrorCategory::NotFound,
                _ => ErrorCategory::Other,
            },
            Self::NotWritable(_) => ErrorCategory::PermissionDenied,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Other,
        }
    }
}

/// First five conflicts, then an overflow count
pub fn summarize_conflicts(conflicts: &[String]) -> String {
    const SHOWN: usize = 5;

    let mut summary = conflicts
        .iter()
        .take(SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if conflicts.len() > SHOWN {
        summary.push_str(&format!(", and {} more", conflicts.len() - SHOWN));
    }
    summary
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
