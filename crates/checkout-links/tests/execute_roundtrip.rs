#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use checkout_links::catalog::{CatalogEntry, EntryKind};
use checkout_links::context::LinkContext;
use checkout_links::store::{LINKS_DB_FILE, LinksDb, SCHEMA_VERSION_KEY};
use checkout_links::{Error, executor, planner};

fn ctx(root: &Path) -> LinkContext {
    let mut ctx = LinkContext::new(root.to_path_buf());
    ctx.force = true;
    ctx.prompt = false;
    ctx.on_bot = true;
    ctx
}

fn dir_entry(path: &'static str) -> CatalogEntry {
    CatalogEntry {
        path,
        kind: EntryKind::Directory,
    }
}

/// One full pass: cleanup, plan, execute. What `setup-links` does per run.
fn sync(entries: &[CatalogEntry], db: &mut LinksDb, ctx: &LinkContext) -> Result<(), Error> {
    executor::cleanup(db, ctx)?;
    let actions = planner::plan(entries, ctx)?;
    executor::execute(&actions, db, ctx)
}

#[test]
fn executing_the_base_scenario_links_and_records() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("chromium/src/base")).unwrap();
    let ctx = ctx(tmp.path());
    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE)).unwrap();

    sync(&[dir_entry("base")], &mut db, &ctx).unwrap();

    let link = tmp.path().join("base");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_link(&link).unwrap(), PathBuf::from("chromium/src/base"));
    assert_eq!(db.link_for("chromium/src/base"), Some("base"));
    db.close().unwrap();

    // The db on disk is exactly the created link plus the schema stamp.
    let raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(&fs::read(tmp.path().join(LINKS_DB_FILE)).unwrap()).unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw["chromium/src/base"], "base");
    assert_eq!(raw[SCHEMA_VERSION_KEY], 1);
}

#[test]
fn nested_links_are_relative_to_their_parent() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("chromium/src/third_party/expat")).unwrap();
    let ctx = ctx(tmp.path());
    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE)).unwrap();

    sync(&[dir_entry("third_party/expat")], &mut db, &ctx).unwrap();

    let link = tmp.path().join("third_party/expat");
    assert_eq!(
        fs::read_link(&link).unwrap(),
        PathBuf::from("../chromium/src/third_party/expat")
    );
    assert!(link.join(".").exists(), "link must resolve to the source dir");
}

#[test]
fn unforced_run_refuses_to_touch_real_content() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("chromium/src/base")).unwrap();
    fs::write(tmp.path().join("base"), b"work in progress").unwrap();
    let mut ctx = ctx(tmp.path());
    ctx.force = false;
    ctx.on_bot = false;
    ctx.prompt = false;
    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE)).unwrap();

    let err = sync(&[dir_entry("base")], &mut db, &ctx).unwrap_err();
    assert!(matches!(err, Error::DangerousPending));
    assert_eq!(err.exit_code(), 1);

    // Nothing was performed: the file survives and nothing was recorded.
    assert_eq!(fs::read(tmp.path().join("base")).unwrap(), b"work in progress");
    assert!(db.is_empty());
}

#[test]
fn dry_run_performs_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("chromium/src/base")).unwrap();
    let mut ctx = ctx(tmp.path());
    ctx.dry_run = true;
    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE)).unwrap();

    sync(&[dir_entry("base")], &mut db, &ctx).unwrap();
    assert!(!tmp.path().join("base").exists());
    assert!(db.is_empty());
}

#[test]
fn two_runs_converge_to_the_same_state() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("chromium/src/base")).unwrap();
    fs::create_dir_all(tmp.path().join("chromium/src/net")).unwrap();
    let ctx = ctx(tmp.path());
    let entries = [dir_entry("base"), dir_entry("net")];
    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE)).unwrap();

    sync(&entries, &mut db, &ctx).unwrap();
    let first_links = db.links();
    let first_base = fs::read_link(tmp.path().join("base")).unwrap();

    sync(&entries, &mut db, &ctx).unwrap();
    assert_eq!(db.links(), first_links);
    assert_eq!(fs::read_link(tmp.path().join("base")).unwrap(), first_base);
    assert_eq!(
        fs::read_link(tmp.path().join("net")).unwrap(),
        PathBuf::from("chromium/src/net")
    );
}

#[test]
fn replanning_replaces_a_stale_link() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("chromium/src/base")).unwrap();
    // A stale link left by something else entirely.
    std::os::unix::fs::symlink("somewhere-stale", tmp.path().join("base")).unwrap();
    let ctx = ctx(tmp.path());
    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE)).unwrap();

    sync(&[dir_entry("base")], &mut db, &ctx).unwrap();
    assert_eq!(
        fs::read_link(tmp.path().join("base")).unwrap(),
        PathBuf::from("chromium/src/base")
    );
}
