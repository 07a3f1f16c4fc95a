#![cfg(unix)]

use std::fs;
use std::path::Path;

use checkout_links::catalog::{CatalogEntry, EntryKind};
use checkout_links::context::LinkContext;
use checkout_links::executor;
use checkout_links::planner;
use checkout_links::store::{LINKS_DB_FILE, LinksDb, SCHEMA_VERSION_KEY};

fn ctx(root: &Path) -> LinkContext {
    let mut ctx = LinkContext::new(root.to_path_buf());
    ctx.force = true;
    ctx.prompt = false;
    ctx.on_bot = true;
    ctx
}

#[test]
fn cleanup_removes_recorded_links_and_their_entries() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("chromium/src/base")).unwrap();
    let ctx = ctx(tmp.path());
    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE)).unwrap();

    let entries = [CatalogEntry {
        path: "base",
        kind: EntryKind::Directory,
    }];
    let actions = planner::plan(&entries, &ctx).unwrap();
    executor::execute(&actions, &mut db, &ctx).unwrap();
    assert!(tmp.path().join("base").exists());

    executor::cleanup(&mut db, &ctx).unwrap();
    assert!(!tmp.path().join("base").exists());
    assert!(db.is_empty());
    db.close().unwrap();

    // Cleanup followed by an empty catalog: only the schema stamp remains.
    let raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(&fs::read(tmp.path().join(LINKS_DB_FILE)).unwrap()).unwrap();
    assert_eq!(raw.len(), 1);
    assert!(raw.contains_key(SCHEMA_VERSION_KEY));
}

#[test]
fn cleanup_drops_stale_entries_for_dangling_links() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = ctx(tmp.path());
    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE)).unwrap();

    // A link whose source has since vanished from the checkout.
    std::os::unix::fs::symlink("chromium/src/gone", tmp.path().join("gone")).unwrap();
    db.record("chromium/src/gone", "gone").unwrap();

    executor::cleanup(&mut db, &ctx).unwrap();
    assert!(fs::symlink_metadata(tmp.path().join("gone")).is_err());
    assert_eq!(db.link_for("chromium/src/gone"), None);
}

#[test]
fn cleanup_leaves_entries_whose_path_is_not_a_link() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = ctx(tmp.path());
    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE)).unwrap();

    // The recorded link was replaced by hand with a real file; cleanup must
    // not delete content it did not create.
    fs::write(tmp.path().join("base"), b"hand-made").unwrap();
    db.record("chromium/src/base", "base").unwrap();

    executor::cleanup(&mut db, &ctx).unwrap();
    assert_eq!(fs::read(tmp.path().join("base")).unwrap(), b"hand-made");
    assert_eq!(db.link_for("chromium/src/base"), Some("base"));
}

#[test]
fn dry_run_cleanup_touches_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let mut ctx = ctx(tmp.path());
    let mut db = LinksDb::open(&ctx.root.join(LINKS_DB_FILE)).unwrap();

    std::os::unix::fs::symlink("chromium/src/base", tmp.path().join("base")).unwrap();
    db.record("chromium/src/base", "base").unwrap();

    ctx.dry_run = true;
    executor::cleanup(&mut db, &ctx).unwrap();
    assert!(fs::symlink_metadata(tmp.path().join("base")).is_ok());
    assert_eq!(db.link_for("chromium/src/base"), Some("base"));
}
