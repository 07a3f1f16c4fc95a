//! Platform seams: symlink creation, tree removal, and the Windows
//! privilege probe.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// True when the object at `path` is itself a symlink (the link is not
/// followed; a dangling link still reports true).
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

#[cfg(unix)]
pub fn symlink(target: &Path, link: &Path, _target_is_dir: bool) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub fn symlink(target: &Path, link: &Path, target_is_dir: bool) -> io::Result<()> {
    if target_is_dir {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

/// Recursively delete a real directory. `fs::remove_dir_all` fails on
/// read-only entries on Windows, so the removal shells out to `rd` there.
pub fn remove_tree(path: &Path) -> Result<()> {
    #[cfg(windows)]
    {
        let status = std::process::Command::new("cmd")
            .args(["/c", "rd", "/q", "/s"])
            .arg(path)
            .status()
            .map_err(|e| Error::msg(format!("failed to spawn rd for {}: {e}", path.display())))?;
        if !status.success() {
            return Err(Error::msg(format!(
                "rd failed for {}: {status}",
                path.display()
            )));
        }
        Ok(())
    }
    #[cfg(not(windows))]
    {
        fs::remove_dir_all(path)
            .map_err(|e| Error::msg(format!("failed to remove dir {}: {e}", path.display())))
    }
}

/// Remove one previously recorded link. Tolerates a path that is already
/// gone, so cleanup never trips over entries removed by hand.
pub fn remove_link(path: &Path) -> Result<()> {
    #[cfg(windows)]
    {
        // Directory links need rmdir; rmdir on a link does not recurse into
        // the target.
        if path.is_dir() {
            let status = std::process::Command::new("cmd")
                .args(["/c", "rmdir", "/q"])
                .arg(path)
                .status()
                .map_err(|e| {
                    Error::msg(format!("failed to spawn rmdir for {}: {e}", path.display()))
                })?;
            if !status.success() {
                return Err(Error::msg(format!(
                    "rmdir failed for {}: {status}",
                    path.display()
                )));
            }
            return Ok(());
        }
    }
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::msg(format!(
            "failed to remove link {}: {e}",
            path.display()
        ))),
    }
}

/// Creating symlinks on Windows needs elevation (or developer mode). Probe
/// once at startup by linking inside a scratch directory so the failure
/// message points at the real cause instead of the first catalog entry.
#[cfg(windows)]
pub fn check_symlink_privilege() -> Result<()> {
    let dir = tempfile::tempdir()
        .map_err(|e| Error::Privilege(format!("cannot create scratch dir for probe: {e}")))?;
    let target = dir.path().join("probe-target");
    fs::write(&target, b"probe")
        .map_err(|e| Error::Privilege(format!("cannot write probe file: {e}")))?;
    symlink(&target, &dir.path().join("probe-link"), false).map_err(|e| {
        Error::Privilege(format!(
            "cannot create symlinks ({e}); start an elevated command prompt and try again"
        ))
    })
}

#[cfg(not(windows))]
pub fn check_symlink_privilege() -> Result<()> {
    Ok(())
}

/// Path of `source` as seen from the directory containing `link`, both
/// workspace-relative. Catalog paths never contain `..`, so walking up one
/// level per link-parent component is enough.
pub fn relative_source(source: &Path, link: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    if let Some(parent) = link.parent() {
        for _ in parent.components() {
            out.push("..");
        }
    }
    out.push(source);
    out
}
