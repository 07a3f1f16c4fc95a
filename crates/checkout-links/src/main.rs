use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use checkout_links::catalog::{self, TargetOs};
use checkout_links::context::LinkContext;
use checkout_links::error::{Error, Result};
use checkout_links::store::{LINKS_DB_FILE, LinksDb};
use checkout_links::{executor, planner, platform};

/// Set up symlinks from a standalone workspace into a Chromium checkout.
///
/// The workspace shares most dependencies and build tools with Chromium;
/// instead of syncing them separately, the expected paths are emulated by
/// linking into the full checkout at `chromium/src`.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Print what would be done, but don't perform any operations. This
    /// will automatically set logging to verbose.
    #[arg(short = 'd', long)]
    dry_run: bool,

    /// Only clean previously created links, don't create new ones. This
    /// will automatically set logging to verbose.
    #[arg(short = 'c', long)]
    clean_only: bool,

    /// Force link creation. CAUTION: this deletes existing folders and
    /// files in the locations where links are about to be created.
    #[arg(short = 'f', long)]
    force: bool,

    /// Don't prompt, even when planning a dangerous action.
    #[arg(short = 'n', long)]
    no_prompt: bool,

    /// Print verbose output for debugging.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Workspace root containing the `chromium/src` checkout.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Extend the catalog with platform-specific entries (repeatable).
    /// Defaults to the host platform.
    #[arg(long = "target-os", value_enum)]
    target_os: Vec<TargetOs>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Bots run unattended: force on, prompting off, no closing message.
    let on_bot = std::env::var("CHROME_HEADLESS").is_ok_and(|v| v == "1");

    let verbose = args.verbose || args.dry_run || args.force || args.clean_only;
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .without_time()
        .init();

    match run(args, on_bot) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: Args, on_bot: bool) -> Result<()> {
    platform::check_symlink_privilege()?;

    let root = args
        .root
        .canonicalize()
        .map_err(|e| Error::msg(format!("bad workspace root {}: {e}", args.root.display())))?;

    let mut ctx = LinkContext::new(root);
    ctx.force = args.force || on_bot;
    ctx.dry_run = args.dry_run;
    ctx.prompt = !args.no_prompt && !on_bot;
    ctx.on_bot = on_bot;
    ctx.target_os = if args.target_os.is_empty() {
        catalog::host_target_os()
    } else {
        args.target_os
    };

    if !ctx.checkout.exists() {
        return Err(Error::MissingCheckout(ctx.checkout.clone()));
    }

    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE))?;
    let result = run_with_db(&mut db, &ctx, args.clean_only);
    let closed = db.close();
    result?;
    closed
}

fn run_with_db(db: &mut LinksDb, ctx: &LinkContext, clean_only: bool) -> Result<()> {
    executor::cleanup(db, ctx)?;
    if clean_only {
        return Ok(());
    }

    let entries = catalog::entries(&ctx.target_os);
    let actions = planner::plan(&entries, ctx)?;
    executor::execute(&actions, db, ctx)
}
