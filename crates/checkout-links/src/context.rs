use std::path::{Path, PathBuf};

use crate::catalog::TargetOs;

/// Relative location of the vendored Chromium checkout inside the workspace.
pub const CHECKOUT_REL: &str = "chromium/src";

/// Everything a run needs to know, resolved once at startup and passed
/// explicitly to the planner and executor.
#[derive(Debug, Clone)]
pub struct LinkContext {
    /// Workspace root. Catalog link paths are relative to this.
    pub root: PathBuf,
    /// Absolute path of the Chromium checkout (`<root>/chromium/src`).
    pub checkout: PathBuf,
    pub force: bool,
    pub dry_run: bool,
    pub prompt: bool,
    pub on_bot: bool,
    pub target_os: Vec<TargetOs>,
}

impl LinkContext {
    pub fn new(root: PathBuf) -> Self {
        let checkout = root.join("chromium").join("src");
        Self {
            root,
            checkout,
            force: false,
            dry_run: false,
            prompt: true,
            on_bot: false,
            target_os: Vec::new(),
        }
    }

    /// Absolute path of a catalog entry inside the checkout.
    pub fn source_abs(&self, rel: &str) -> PathBuf {
        self.checkout.join(rel)
    }

    /// Absolute path of a catalog entry's link in the workspace.
    pub fn link_abs(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }

    /// Workspace-relative source path, as recorded in the links db.
    /// Kept slash-separated on every platform so db keys stay portable.
    pub fn source_rel(&self, rel: &str) -> PathBuf {
        PathBuf::from(format!("{CHECKOUT_REL}/{rel}"))
    }
}
