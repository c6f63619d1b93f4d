//! Integration tests for the inventory pipeline: columnar listing, detail
//! parsing and snapshot semantics through the public library surface.

use flatsea::index::{Inventory, collect_entries};
use flatsea::parse;

/// Canned `flatpak info` block whose three title lines spell `name`.
fn info_block(name: &str, size: &str) -> String {
    format!("{name}\n\n\nName: {name}\nInstalled: {size}\n")
}

/// What: A list containing only reserved-namespace lines yields an empty
/// inventory.
#[test]
fn reserved_only_list_yields_empty_inventory() {
    let list = "org.freedesktop.Platform\norg.gnome.Platform\norg.kde.Platform\n";
    let mut called = false;
    let entries = collect_entries(list, |_| {
        called = true;
        Ok(info_block("X", "1 MB"))
    });
    assert!(entries.is_empty());
    assert!(!called, "no detail call should happen for runtimes");

    let mut inv = Inventory::new();
    inv.replace_with(entries);
    assert!(inv.list().is_empty());
}

/// What: Identifier filtering keeps exactly the non-reserved candidates.
#[test]
fn gnome_entry_filtered_from_candidates() {
    let hits = parse::parse_columnar("org.gnome.Foo\napp.example.Editor\n");
    let ids: Vec<&str> = hits.iter().map(|h| h.app_id.as_str()).collect();
    assert_eq!(ids, vec!["app.example.Editor"]);
}

/// What: The detail scenario from the subprocess contract parses as
/// specified: title concatenation wins, `Installed` is captured verbatim.
#[test]
fn detail_block_scenario_title_and_size() {
    let raw = "My\nEditor\nApp\nName: ignored\nInstalled: 12.3 MB\n";
    let entry = parse::parse_app_details("app.example.Editor", raw).expect("entry");
    assert_eq!(entry.name, "MyEditorApp");
    assert_eq!(
        entry.attrs.get("Installed").map(String::as_str),
        Some("12.3 MB")
    );
    assert_eq!(entry.installed_size, "12.3 MB");
}

/// What: Two rebuilds over identical underlying state are bit-identical.
#[test]
fn refresh_twice_is_bit_identical() {
    let list = "app.b.B\napp.a.A\n";
    let info = |id: &str| {
        Ok(match id {
            "app.a.A" => info_block("Alpha", "2 MB"),
            _ => info_block("Beta", "3 MB"),
        })
    };

    let mut one = Inventory::new();
    one.replace_with(collect_entries(list, info));
    let mut two = Inventory::new();
    two.replace_with(collect_entries(list, info));
    assert_eq!(one, two);

    let json_one = serde_json::to_string(&one.list()).expect("json");
    let json_two = serde_json::to_string(&two.list()).expect("json");
    assert_eq!(json_one, json_two);
}

/// What: Listing order is display-name ordinal, independent of list order.
#[test]
fn listing_sorted_by_display_name_ordinal() {
    let list = "app.one.A\napp.two.B\napp.three.C\n";
    let info = |id: &str| {
        Ok(match id {
            "app.one.A" => info_block("beta", "1 MB"),
            "app.two.B" => info_block("Alpha", "1 MB"),
            _ => info_block("Zed", "1 MB"),
        })
    };
    let mut inv = Inventory::new();
    inv.replace_with(collect_entries(list, info));
    let names: Vec<&str> = inv.list().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Zed", "beta"]);
}
