//! Turns the static catalog plus the current filesystem state into an
//! ordered list of discrete actions that converge the workspace toward
//! "every catalog entry is a link into the checkout".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::catalog::{CatalogEntry, EntryKind};
use crate::context::LinkContext;
use crate::error::{Error, Result};

/// One atomic filesystem operation. Created during planning, never
/// mutated, executed at most once in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Delete a file or an existing link. Dangerous when the path holds a
    /// real file rather than a link.
    Remove { path: PathBuf, dangerous: bool },
    /// Recursively delete a real directory. Always dangerous.
    Rmtree { path: PathBuf },
    /// Create a directory chain for a link's parent.
    Makedirs { path: PathBuf },
    /// Create `link` pointing at `source`, both workspace-relative.
    Symlink { source: PathBuf, link: PathBuf },
}

impl Action {
    /// Sort key: all removals run before any directory creation, which runs
    /// before any link creation. For a single entry this puts the removal
    /// of stale content strictly before the creation at the same path.
    pub fn priority(&self) -> u8 {
        match self {
            Action::Remove { .. } | Action::Rmtree { .. } => 0,
            Action::Makedirs { .. } => 1,
            Action::Symlink { .. } => 2,
        }
    }

    /// True when executing this action destroys real (non-link) content.
    pub fn dangerous(&self) -> bool {
        match self {
            Action::Remove { dangerous, .. } => *dangerous,
            Action::Rmtree { .. } => true,
            Action::Makedirs { .. } | Action::Symlink { .. } => false,
        }
    }

    /// Log a description of this action. `planning` selects the "planning
    /// to" voice used by dry runs and the dangerous-action summary.
    pub fn announce(&self, planning: bool) {
        match self {
            Action::Remove { path, dangerous } => {
                let kind = if *dangerous { "file" } else { "link" };
                match (planning, dangerous) {
                    (true, true) => warn!("Planning to remove {kind}: {}", path.display()),
                    (true, false) => info!("Planning to remove {kind}: {}", path.display()),
                    (false, true) => warn!("Removing {kind}: {}", path.display()),
                    (false, false) => info!("Removing {kind}: {}", path.display()),
                }
            }
            Action::Rmtree { path } => {
                if planning {
                    warn!("Planning to remove directory: {}", path.display());
                } else {
                    warn!("Removing directory: {}", path.display());
                }
            }
            // Directory creation is not worth announcing.
            Action::Makedirs { .. } => {}
            Action::Symlink { source, link } => {
                if planning {
                    info!(
                        "Planning to create link from {} to {}",
                        link.display(),
                        source.display()
                    );
                } else {
                    debug!("Linking from {} to {}", link.display(), source.display());
                }
            }
        }
    }
}

/// Plan the actions needed to converge every catalog entry, sorted so that
/// removals precede directory creation, which precedes link creation.
///
/// The sort is stable and global: for two entries A and B, all of A's and
/// B's removals run before either creation. Actions are path-disjoint so
/// this is harmless, but there is no per-entry atomicity.
pub fn plan(entries: &[CatalogEntry], ctx: &LinkContext) -> Result<Vec<Action>> {
    let mut actions = Vec::new();
    for entry in entries {
        plan_entry(entry, ctx, &mut actions)?;
    }

    if !ctx.on_bot && ctx.force {
        // Legacy SVN-era checkouts left cached DEPS urls beside the
        // workspace; they break future syncs once directories become links.
        if let Some(parent) = ctx.root.parent() {
            let entries_file = parent.join(".gclient_entries");
            if entries_file.exists() {
                actions.push(Action::Remove {
                    path: entries_file,
                    dangerous: true,
                });
            }
        }
    }

    actions.sort_by_key(Action::priority);
    Ok(actions)
}

/// Zero or more actions for one catalog entry. A missing source produces no
/// actions: platform-specific dependencies are expected to be partially
/// absent.
fn plan_entry(entry: &CatalogEntry, ctx: &LinkContext, actions: &mut Vec<Action>) -> Result<()> {
    let source_abs = ctx.source_abs(entry.path);
    let Ok(source_meta) = fs::metadata(&source_abs) else {
        debug!("Silently ignoring missing source: {}", source_abs.display());
        return Ok(());
    };

    let kind_ok = match entry.kind {
        EntryKind::File => source_meta.is_file(),
        EntryKind::Directory => source_meta.is_dir(),
    };
    if !kind_ok {
        return Err(Error::Planning(format!(
            "{} is catalogued as a {} but the checkout has something else at {}",
            entry.path,
            entry.kind.describe(),
            source_abs.display()
        )));
    }

    let link_abs = ctx.link_abs(entry.path);
    match fs::symlink_metadata(&link_abs) {
        Ok(meta) => {
            let ft = meta.file_type();
            if ft.is_symlink() {
                // Stale or correct, always replaced; replacement keeps the
                // run idempotent and the removal stays non-dangerous.
                actions.push(Action::Remove {
                    path: link_abs.clone(),
                    dangerous: false,
                });
            } else if ft.is_file() {
                actions.push(Action::Remove {
                    path: link_abs.clone(),
                    dangerous: true,
                });
            } else if ft.is_dir() {
                actions.push(Action::Rmtree {
                    path: link_abs.clone(),
                });
            } else {
                return Err(Error::Planning(format!(
                    "don't know how to plan: {}",
                    link_abs.display()
                )));
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(Error::msg(format!(
                "failed to inspect {}: {e}",
                link_abs.display()
            )));
        }
    }

    if let Some(parent) = Path::new(entry.path).parent() {
        if !parent.as_os_str().is_empty() {
            let parent_abs = ctx.root.join(parent);
            if !parent_abs.exists() {
                actions.push(Action::Makedirs { path: parent_abs });
            }
        }
    }

    actions.push(Action::Symlink {
        source: ctx.source_rel(entry.path),
        link: PathBuf::from(entry.path),
    });
    Ok(())
}
