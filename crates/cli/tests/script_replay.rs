use chrono::Utc;
use serde_json::Value;

use stockroom_cli::{render, ScriptError, Session};
use stockroom_core::ProductId;
use stockroom_inventory::{InventoryStore, SortKey};
use stockroom_products::sample_catalog;

fn sample_session() -> Session {
    Session::new(InventoryStore::with_products(sample_catalog(Utc::now())))
}

fn view_names(session: &Session) -> Vec<String> {
    session
        .store()
        .filtered_products()
        .iter()
        .map(|p| p.name().to_string())
        .collect()
}

#[test]
fn usb_search_shows_only_the_hub() {
    let mut session = sample_session();
    session.run(r#"{"action": "search", "term": "usb"}"#).unwrap();

    assert_eq!(view_names(&session), vec!["USB-C Hub"]);
}

#[test]
fn full_editing_session() {
    let mut session = sample_session();
    let script = r#"
{"action": "add", "name": "HDMI Cable", "category": "Accessories", "price": "12.50", "quantity": 3, "description": "2m braided"}
{"action": "update", "id": 2, "name": "Wireless Mouse", "category": "Accessories", "price": "24.99", "quantity": 4}
{"action": "remove", "id": 3}
{"action": "adjust", "id": 4, "delta": -10}
{"action": "adjust", "id": 5, "delta": 1}
{"action": "sort", "key": "price"}
"#;

    let applied = session.run(script).unwrap();
    assert_eq!(applied, 6);

    let store = session.store();
    let hdmi = store.get(ProductId::new(6)).unwrap();
    assert_eq!(hdmi.name(), "HDMI Cable");
    assert_eq!(hdmi.price().to_string(), "12.50");

    assert_eq!(store.get(ProductId::new(2)).unwrap().price().to_string(), "24.99");
    assert!(store.get(ProductId::new(3)).is_none());
    assert_eq!(store.get(ProductId::new(4)).unwrap().quantity(), 0);
    assert_eq!(store.get(ProductId::new(5)).unwrap().quantity(), 16);
    assert_eq!(store.sort_key(), SortKey::Price);

    assert_eq!(
        view_names(&session),
        vec!["HDMI Cable", "Wireless Mouse", "USB-C Hub", "Monitor 27\"", "Laptop Pro 15\""]
    );

    let low: Vec<String> = store
        .low_stock_products()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(low, vec!["Wireless Mouse", "HDMI Cable"]);
}

#[test]
fn actions_on_missing_ids_change_nothing() {
    let mut session = sample_session();
    let before = session.store().clone();
    let script = r#"
{"action": "update", "id": 40, "name": "Ghost", "category": "Software", "price": 1, "quantity": 1}
{"action": "remove", "id": 41}
{"action": "adjust", "id": 42, "delta": 5}
"#;

    assert_eq!(session.run(script).unwrap(), 3);
    assert_eq!(session.store(), &before);
    assert_eq!(session.version(), 0);
}

#[test]
fn malformed_line_aborts_before_any_change() {
    let mut session = sample_session();
    let script = "{\"action\": \"remove\", \"id\": 1}\nnot json\n";

    match session.run(script) {
        Err(ScriptError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected Parse error, got {other:?}"),
    }
    assert_eq!(session.store().len(), 5);
}

#[test]
fn json_report_has_view_and_totals() {
    let mut session = sample_session();
    session.run(r#"{"action": "search", "term": "accessories"}"#).unwrap();

    let report: Value = serde_json::from_str(&render::json(session.store()).unwrap()).unwrap();

    assert_eq!(report["searchTerm"], "accessories");
    assert_eq!(report["sortKey"], "name");
    let names: Vec<&str> = report["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["USB-C Hub", "Wireless Mouse"]);
    assert_eq!(report["products"][0]["inStock"], false);
    assert_eq!(report["lowStock"][0]["id"], 2);
    assert_eq!(report["summary"]["totalValue"], "43618.56");
    assert_eq!(report["summary"]["totalProducts"], 5);
}

#[test]
fn table_report_lists_rows_and_totals() {
    let session = sample_session();
    let table = render::table(session.store());

    assert!(table.starts_with("Products: 5 shown of 5"));
    assert!(table.contains("USB-C Hub"));
    assert!(table.contains("out of stock"));
    assert!(table.contains("Total inventory value: 43618.56"));
    assert!(table.ends_with("Low stock items: Wireless Mouse"));
}
