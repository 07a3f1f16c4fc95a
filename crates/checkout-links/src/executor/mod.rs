//! Executes a planned action list and keeps the links db in sync with what
//! actually landed on disk.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::context::LinkContext;
use crate::error::{Error, Result};
use crate::planner::Action;
use crate::platform;
use crate::store::LinksDb;

/// Execute the actions in planned order.
///
/// Dry runs announce every action and perform nothing. Dangerous actions
/// are refused outright without `--force`, and confirmed interactively with
/// it (unless prompting is off). Each successful link creation is recorded
/// in the db before the next action runs.
pub fn execute(actions: &[Action], db: &mut LinksDb, ctx: &LinkContext) -> Result<()> {
    if ctx.dry_run {
        for action in actions {
            action.announce(true);
        }
        info!("Not doing anything because dry-run was specified.");
        return Ok(());
    }

    if actions.iter().any(Action::dangerous) {
        warn!("Dangerous actions:");
        for action in actions.iter().filter(|a| a.dangerous()) {
            action.announce(true);
        }

        if !ctx.force {
            error!(
                "\n\
                 ACTION REQUIRED\n\
                 \n\
                 Some paths that must become links into the Chromium checkout\n\
                 currently hold real files or directories. To avoid disrupting\n\
                 work in progress, nothing has been deleted.\n\
                 \n\
                 Re-run with --force to replace the paths listed above, after\n\
                 a confirmation prompt with this summary of the work-to-be-done."
            );
            return Err(Error::DangerousPending);
        }
        if ctx.prompt && !confirm("Would you like to perform the above plan?")? {
            return Err(Error::Declined);
        }
    }

    for action in actions {
        action.announce(false);
        perform(action, db, ctx)?;
    }

    if !ctx.on_bot && ctx.force {
        info!(
            "Completed!\n\nNow run `gclient sync|runhooks` again to let the \
             remaining hooks (that probably were interrupted) execute."
        );
    }
    Ok(())
}

fn perform(action: &Action, db: &mut LinksDb, ctx: &LinkContext) -> Result<()> {
    match action {
        Action::Remove { path, .. } => fs::remove_file(path)
            .map_err(|e| Error::msg(format!("failed to remove {}: {e}", path.display()))),
        Action::Rmtree { path } => platform::remove_tree(path),
        Action::Makedirs { path } => fs::create_dir_all(path)
            .map_err(|e| Error::msg(format!("failed to create dirs {}: {e}", path.display()))),
        Action::Symlink { source, link } => {
            let link_abs = ctx.link_abs(link);
            let source_abs = ctx.root.join(source);
            let target_is_dir = source_abs.is_dir();
            // NTFS does not reliably support relative symlink targets, so
            // Windows links are absolute; everywhere else they are relative
            // to the link's parent so the workspace can be moved as a whole.
            let target = if cfg!(windows) {
                source_abs
            } else {
                platform::relative_source(source, link)
            };
            platform::symlink(&target, &link_abs, target_is_dir).map_err(|e| {
                Error::Link(format!(
                    "failed to create link {} -> {}: {e}",
                    link_abs.display(),
                    target.display()
                ))
            })?;
            db.record(&path_key(source), &path_key(link))
        }
    }
}

/// Undo every link recorded in the db. Runs before each planning pass, so
/// replanning always starts from a link-free workspace; this is what makes
/// repeated runs idempotent.
pub fn cleanup(db: &mut LinksDb, ctx: &LinkContext) -> Result<()> {
    debug!("CleanupLinks");
    for (source, link) in db.links() {
        let link_abs = ctx.link_abs(&link);
        // On Windows the standard check cannot see symlinks at all, so any
        // existing object at a recorded path is treated as "was a link".
        if platform::is_symlink(&link_abs) || cfg!(windows) {
            debug!("Removing link to {} at {}", source, link_abs.display());
            if !ctx.dry_run {
                platform::remove_link(&link_abs)?;
                db.remove(&source);
            }
        }
    }
    Ok(())
}

/// Ask a yes/no question on stdin; empty input (or EOF) means the default,
/// which is "no".
fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    loop {
        print!("{question} [y/N]: ");
        io::stdout()
            .flush()
            .map_err(|e| Error::msg(format!("stdout error: {e}")))?;

        let mut line = String::new();
        let n = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::msg(format!("stdin error: {e}")))?;
        if n == 0 {
            return Ok(false);
        }
        let answer = line.trim().to_ascii_lowercase();
        if answer.is_empty() {
            return Ok(false);
        }
        if "yes".starts_with(&answer) {
            return Ok(true);
        }
        if "no".starts_with(&answer) {
            return Ok(false);
        }
        println!("Please respond with 'yes' or 'no' (or 'y' or 'n').");
    }
}

/// Db keys keep the slash-separated form the paths were catalogued with.
fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
