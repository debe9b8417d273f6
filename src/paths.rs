//! Single source of truth for the files this tool touches.
//!
//! This module defines WHERE data lives relative to the project root.
//! It has no I/O, no validation, no business logic.
//!
//! ```text
//! project/
//! ├── .env.example   # optional template, read-only to this tool
//! └── .env.local     # output, fully overwritten on setup
//! ```

use std::path::{Path, PathBuf};

/// Output file consumed by the app at startup: `<root>/.env.local`
pub fn env_local(root: &Path) -> PathBuf {
    root.join(".env.local")
}

/// Optional template seeding the output: `<root>/.env.example`
pub fn env_example(root: &Path) -> PathBuf {
    root.join(".env.example")
}
