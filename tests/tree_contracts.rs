use std::fs;
use std::path::Path;

use labbook_core::asset::{Asset, AssetKind};
use labbook_core::ignore::include_asset;
use labbook_core::metadata::FILE_HANDLER_ID;
use labbook_core::tree::{
    all_notes, ancestor_uris_between, convert_tree, filter_included_file_assets,
    find_descendant_by_uri, summarize_tree, PathConversion,
};
use serde_json::json;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Route library events through the test harness; `RUST_LOG` controls what
/// shows up on failure output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Minimal stand-in for the crawler: walk a directory into an asset tree,
/// applying the same deny-list gate the crawler applies per candidate.
fn scan(path: &Path) -> Asset {
    if path.is_dir() {
        let mut entries: Vec<_> = fs::read_dir(path)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        entries.sort();

        let mut asset = Asset::new(AssetKind::Directory, path.to_string_lossy());
        asset.children = Some(
            entries
                .iter()
                .filter(|entry| include_asset(&entry.to_string_lossy()))
                .map(|entry| scan(entry))
                .collect(),
        );
        asset
    } else {
        Asset::new(AssetKind::File, path.to_string_lossy())
    }
}

fn populate(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/main.py"), "print('hi')\n").unwrap();
    fs::write(root.join("src/util.py"), "\n").unwrap();
    fs::write(root.join("README.md"), "# notes\n").unwrap();
    // Crawl noise that must never reach the tree
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join(".git/HEAD"), "ref\n").unwrap();
    fs::write(root.join("src/.DS_Store"), "").unwrap();
    fs::write(root.join("labbook.json"), "{}\n").unwrap();
}

#[test]
fn scanned_tree_excludes_denied_names() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());

    let tree = scan(temp_dir.path());

    assert!(find_descendant_by_uri(&tree, &temp_dir.path().join(".git").to_string_lossy()).is_none());
    assert!(find_descendant_by_uri(&tree, &temp_dir.path().join("labbook.json").to_string_lossy()).is_none());
    let src_uri = temp_dir.path().join("src").to_string_lossy().into_owned();
    let src = find_descendant_by_uri(&tree, &src_uri).unwrap();
    assert_eq!(src.child_assets().len(), 2);
}

#[test]
fn scanned_tree_round_trips_through_relative_form() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());
    let root = temp_dir.path();

    let absolute = scan(root);
    let relative = convert_tree(root, &absolute, PathConversion::ToRelative);

    fn assert_relative(asset: &Asset) {
        let uri = asset.uri_str().unwrap();
        assert!(!Path::new(uri).is_absolute(), "still absolute: {}", uri);
        assert!(!uri.contains('\\'), "unnormalized separator: {}", uri);
        for child in asset.child_assets() {
            assert_relative(child);
        }
    }
    for child in relative.child_assets() {
        assert_relative(child);
    }

    let restored = convert_tree(root, &relative, PathConversion::ToAbsolute);
    assert_eq!(restored, absolute);
}

#[test]
fn ancestor_walk_matches_scanned_directory_chain() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/pkg")).unwrap();
    fs::write(root.join("src/pkg/mod.py"), "\n").unwrap();

    let tree = scan(root);
    let leaf_uri = root.join("src/pkg/mod.py").to_string_lossy().into_owned();
    let root_uri = root.to_string_lossy().into_owned();

    let ancestors = ancestor_uris_between(&leaf_uri, &root_uri);
    assert_eq!(ancestors.len(), 2);
    // Innermost first, and every listed ancestor exists as a real node.
    assert!(ancestors[0].ends_with("pkg"));
    assert!(ancestors[1].ends_with("src"));
    for uri in &ancestors {
        assert!(find_descendant_by_uri(&tree, uri).is_some(), "missing node {}", uri);
    }
}

#[test]
fn wire_format_preserves_pipeline_shape() {
    let raw = json!({
        "uri": "/proj",
        "type": "directory",
        "notes": [
            {"id": "root-1", "title": "Kickoff", "created": "2024-11-02"},
            {"id": "root-2", "title": "Scope"}
        ],
        "children": [
            {
                "uri": "/proj/data.csv",
                "type": "file",
                "metadata": [
                    {"id": "file-handler", "include": true, "size": 1024},
                    {"id": "csv-handler", "include": true, "columns": 12}
                ],
                "notes": [{"id": "child-1", "title": "Schema"}]
            },
            {
                "uri": "https://example.com/paper",
                "type": "url",
                "name": "Reference paper"
            }
        ]
    });

    let tree: Asset = serde_json::from_value(raw.clone()).unwrap();

    // Absent keys stay absent and handler fields survive flattened.
    assert_eq!(serde_json::to_value(&tree).unwrap(), raw);

    let notes = all_notes(&tree);
    let ids: Vec<_> = notes.iter().map(|tagged| tagged.note.id.as_str()).collect();
    assert_eq!(ids, vec!["root-1", "root-2", "child-1"]);
    assert_eq!(notes[2].asset_uri, "/proj/data.csv");

    let data = find_descendant_by_uri(&tree, "/proj/data.csv").unwrap();
    let entry = labbook_core::metadata::asset_handler_metadata(data, FILE_HANDLER_ID).unwrap();
    assert_eq!(entry.extra.get("size"), Some(&json!(1024)));
}

#[test]
fn missing_include_flag_defaults_to_inclusion() {
    let raw = json!({
        "uri": "/proj/a.py",
        "type": "file",
        "metadata": [{"id": "file-handler"}]
    });
    let asset: Asset = serde_json::from_value(raw).unwrap();
    assert!(filter_included_file_assets(&asset).is_some());
}

#[test]
fn filter_then_convert_then_summarize_composes() {
    init_tracing();
    let raw = json!({
        "uri": "/proj",
        "type": "directory",
        "children": [
            {
                "uri": "/proj/src",
                "type": "directory",
                "children": [
                    {
                        "uri": "/proj/src/main.py",
                        "type": "file",
                        "attributes": {"entrypoint": true}
                    },
                    {
                        "uri": "/proj/src/scratch.py",
                        "type": "file",
                        "metadata": [{"id": "file-handler", "include": false}]
                    }
                ]
            },
            {
                "uri": "external",
                "type": "folder",
                "children": [{"uri": "https://example.com", "type": "url"}]
            }
        ]
    });
    let tree: Asset = serde_json::from_value(raw).unwrap();

    let filtered = filter_included_file_assets(&tree).unwrap();
    assert!(find_descendant_by_uri(&filtered, "/proj/src/scratch.py").is_none());

    let relative = convert_tree(Path::new("/proj"), &filtered, PathConversion::ToRelative);
    let main = find_descendant_by_uri(&relative, "src/main.py").unwrap();
    assert!(main.is_entry_point());
    // The URL child of the folder kept its opaque URI.
    assert!(find_descendant_by_uri(&relative, "https://example.com").is_some());

    let summary = summarize_tree(&relative);
    assert_eq!(summary.files, 1);
    assert_eq!(summary.directories, 2);
    assert_eq!(summary.folders, 1);
    assert_eq!(summary.external, 1);
    assert_eq!(summary.entry_points, 1);
    assert_eq!(summary.max_depth, 3);
}
