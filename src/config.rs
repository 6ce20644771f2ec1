// SPDX-FileCopyrightText: 2026 Procserve Contributors
// SPDX-License-Identifier: MIT

//! Server settings and the UI-test overrides applied to them.
//!
//! Never apply [`apply_ui_test_overrides`] outside a test harness: it disables
//! authentication and serves hidden files, opening the server to anything that
//! can reach it.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings for the content server, owned by the launching harness.
///
/// The harness constructs (or deserializes) this, hands it to whatever
/// configuration hooks it runs, and then boots the server from the result.
/// Missing or unresolvable values are fatal at startup; nothing here recovers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Move deleted files to the platform trash instead of removing them.
    pub delete_to_trash: bool,
    /// Serve dotfiles and hidden directories under the root.
    pub allow_hidden: bool,
    /// Skip token authentication entirely.
    pub disable_auth: bool,
    /// Directory the server treats as its contents root.
    pub root_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            delete_to_trash: true,
            allow_hidden: false,
            disable_auth: false,
            root_dir: PathBuf::from("."),
        }
    }
}

/// Root directory used for UI tests: the directory containing this crate,
/// resolved to an absolute path with symlinks followed.
pub fn default_test_root() -> io::Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR")).canonicalize()
}

/// Rewrite `settings` for automated UI testing.
///
/// Deletions become permanent (no trash), hidden files are served so fixtures
/// like `.agents/skills` resolve, authentication is switched off, and the
/// server root is pinned to [`default_test_root`]. No other field is touched.
pub fn apply_ui_test_overrides(settings: &mut ServerSettings) -> io::Result<()> {
    settings.delete_to_trash = false;
    settings.allow_hidden = true;
    settings.disable_auth = true;
    settings.root_dir = default_test_root()?;
    Ok(())
}
