//! Package manager detection and post-generation tools
//!
//! This module provides:
//! - Package manager selection and its install/run commands
//! - git initialization and dependency installation behind `ProjectTools`

pub mod package_manager;
pub mod tool;

pub use package_manager::PackageManager;
pub use tool::{GitInit, ProjectTools, SystemTools, INITIAL_COMMIT_MESSAGE};
