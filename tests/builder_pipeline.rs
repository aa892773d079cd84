//! End-to-end pipeline tests: build a document through the mutator, round
//! it through disk, export it, and publish it to a directory host — the
//! same path the CLI drives, minus argument parsing.

use blocksmith::config::SiteConfig;
use blocksmith::deploy::{publish, DirectoryHost, HostProvider};
use blocksmith::document::{ComponentKind, Document};
use blocksmith::export::{export, INDEX_FILE, SCRIPT_FILE, STYLES_FILE};
use blocksmith::mutate::{
    delete_by_id, insert_child, insert_root, patch_props, reorder_root,
};
use blocksmith::store::SnapshotStore;
use serde_json::json;
use tempfile::TempDir;

fn props(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

/// A small landing page: hero container with heading + button, a closing
/// paragraph, customized navbar and footer.
fn build_landing_page() -> Document {
    let mut doc = Document::new();

    let navbar_id = doc.navbar().unwrap().id.clone();
    patch_props(
        &mut doc,
        &navbar_id,
        props(json!({
            "title": "Acme Tools",
            "links": [
                { "label": "Home", "url": "#" },
                { "label": "Docs", "url": "/docs" },
            ],
            "fixed": true,
        })),
    )
    .unwrap();

    let hero = doc.create_node(ComponentKind::Container);
    let hero_id = hero.id.clone();
    insert_root(&mut doc, hero, None).unwrap();

    let heading = doc.create_node(ComponentKind::Text);
    let heading_id = heading.id.clone();
    insert_child(&mut doc, &hero_id, heading).unwrap();
    patch_props(
        &mut doc,
        &heading_id,
        props(json!({ "text": "Build faster", "variant": "heading1", "alignment": "center" })),
    )
    .unwrap();

    let cta = doc.create_node(ComponentKind::Button);
    let cta_id = cta.id.clone();
    insert_child(&mut doc, &hero_id, cta).unwrap();
    patch_props(
        &mut doc,
        &cta_id,
        props(json!({ "text": "Get Started", "url": "/signup", "variant": "primary", "size": "large" })),
    )
    .unwrap();

    let outro = doc.create_node(ComponentKind::Text);
    let outro_id = outro.id.clone();
    insert_root(&mut doc, outro, None).unwrap();
    patch_props(
        &mut doc,
        &outro_id,
        props(json!({ "text": "Made with Blocksmith", "variant": "paragraph" })),
    )
    .unwrap();

    doc
}

#[test]
fn edit_save_load_export_round_trip() {
    let tmp = TempDir::new().unwrap();
    let doc_path = tmp.path().join("site.json");

    let doc = build_landing_page();
    assert!(doc.validate().is_empty());
    doc.save(&doc_path).unwrap();

    let loaded = Document::load(&doc_path).unwrap();
    assert!(loaded.validate().is_empty());
    assert_eq!(loaded.next_id, doc.next_id);

    let site = SiteConfig::named("Acme Tools");
    let bundle = export(&loaded, &site);
    let dist = tmp.path().join("dist");
    bundle.write_to(&dist).unwrap();

    let index = std::fs::read_to_string(dist.join(INDEX_FILE)).unwrap();
    assert!(index.contains("<title>Acme Tools</title>"));
    assert!(index.contains("Build faster"));
    assert!(index.contains("Get Started"));
    assert!(index.contains("Made with Blocksmith"));
    assert!(index.contains("navbar-fixed"));

    let css = std::fs::read_to_string(dist.join(STYLES_FILE)).unwrap();
    assert!(css.contains(".container"));
    let js = std::fs::read_to_string(dist.join(SCRIPT_FILE)).unwrap();
    assert!(js.contains("DOMContentLoaded"));
}

#[test]
fn export_matches_between_original_and_reloaded_document() {
    let tmp = TempDir::new().unwrap();
    let doc_path = tmp.path().join("site.json");
    let doc = build_landing_page();
    doc.save(&doc_path).unwrap();
    let loaded = Document::load(&doc_path).unwrap();

    let site = SiteConfig::named("Acme Tools");
    assert_eq!(export(&doc, &site), export(&loaded, &site));
}

#[test]
fn invariants_hold_across_a_long_edit_session() {
    let mut doc = build_landing_page();

    // Reorder the two content sections back and forth.
    reorder_root(&mut doc, 0, 1).unwrap();
    reorder_root(&mut doc, 1, 0).unwrap();
    assert!(doc.validate().is_empty());

    // Pinned nodes survive deletion attempts.
    let navbar_id = doc.navbar().unwrap().id.clone();
    assert!(delete_by_id(&mut doc, &navbar_id).is_err());
    let footer_id = doc.footer().unwrap().id.clone();
    assert!(delete_by_id(&mut doc, &footer_id).is_err());
    assert!(doc.navbar().is_some());
    assert!(doc.footer().is_some());

    // Drop a nested node, then everything movable.
    let hero_id = doc.content().next().unwrap().id.clone();
    let nested_id = doc.find(&hero_id).unwrap().children[0].id.clone();
    delete_by_id(&mut doc, &nested_id).unwrap();
    let content: Vec<String> = doc.content().map(|n| n.id.clone()).collect();
    for id in content {
        delete_by_id(&mut doc, &id).unwrap();
    }

    assert_eq!(doc.content().count(), 0);
    assert!(doc.validate().is_empty());
}

#[test]
fn snapshot_save_and_restore_through_the_store() {
    let tmp = TempDir::new().unwrap();
    let store_dir = tmp.path().join(".blocksmith");

    let doc = build_landing_page();
    let mut store = SnapshotStore::load(&store_dir);
    store.insert("landing", &doc);
    store.save(&store_dir).unwrap();

    // A later session loads the store fresh and keeps editing.
    let mut store = SnapshotStore::load(&store_dir);
    let restored = store.get("landing").unwrap().document.clone();
    assert!(restored.validate().is_empty());
    assert_eq!(
        export(&restored, &SiteConfig::named("Acme Tools")),
        export(&doc, &SiteConfig::named("Acme Tools")),
    );

    assert!(store.remove("landing"));
    store.save(&store_dir).unwrap();
    assert!(SnapshotStore::load(&store_dir).is_empty());
}

#[test]
fn publish_deploys_the_exported_files() {
    let tmp = TempDir::new().unwrap();
    let host = DirectoryHost::new(tmp.path().join("deploy"));
    let doc = build_landing_page();
    let site = SiteConfig::named("Acme Tools");

    let outcome = publish(&doc, &site, "acme", &host).unwrap();
    assert!(outcome.success);
    assert!(host.project_exists("acme").unwrap());

    let index =
        std::fs::read_to_string(tmp.path().join("deploy/acme").join(INDEX_FILE)).unwrap();
    assert_eq!(Some(index.as_str()), export(&doc, &site).get(INDEX_FILE));
}
