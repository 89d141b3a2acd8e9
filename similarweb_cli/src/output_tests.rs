use super::*;
use serde_json::json;

fn load_fixture(name: &str) -> Value {
    let path = format!(
        "{}/../similarweb_api/tests/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    let text = std::fs::read_to_string(&path).unwrap();
    serde_json::from_str(&text).unwrap()
}

// -- Format parsing --

#[test]
fn test_output_format_parse() {
    assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::parse("csv"), OutputFormat::Csv);
    assert_eq!(OutputFormat::parse("markdown"), OutputFormat::Markdown);
    assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
    assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
    assert_eq!(OutputFormat::parse("anything"), OutputFormat::Table);
}

// -- Row builder tests --

#[test]
fn test_build_rows_array_of_objects() {
    let value = load_fixture("traffic.json");
    let rows = build_rows(&value["Values"]);
    assert_eq!(rows.headers, vec!["Date", "Value"]);
    assert_eq!(rows.rows.len(), 3);
    assert_eq!(rows.rows[0][0], "2013-09-01");
}

#[test]
fn test_build_rows_union_of_keys() {
    let value = json!([{"a": 1}, {"b": "x", "a": 2}]);
    let rows = build_rows(&value);
    assert_eq!(rows.headers, vec!["a", "b"]);
    assert_eq!(rows.rows[0], vec!["1", ""]);
    assert_eq!(rows.rows[1], vec!["2", "x"]);
}

#[test]
fn test_build_rows_object_is_key_value() {
    let value = load_fixture("rank_and_reach.json");
    let rows = build_rows(&value);
    assert_eq!(rows.headers, vec!["Key", "Value"]);
    let global = rows.rows.iter().find(|r| r[0] == "GlobalRank").unwrap();
    assert_eq!(global[1], "2");
}

#[test]
fn test_build_rows_nested_values_are_compact_json() {
    let value = json!({"Sites": ["a.com", "b.com"], "Meta": {"x": null}});
    let rows = build_rows(&value);
    let meta = rows.rows.iter().find(|r| r[0] == "Meta").unwrap();
    assert_eq!(meta[1], r#"{"x":null}"#);
    let sites = rows.rows.iter().find(|r| r[0] == "Sites").unwrap();
    assert_eq!(sites[1], r#"["a.com","b.com"]"#);
}

#[test]
fn test_build_rows_scalars() {
    let rows = build_rows(&json!("Shopping/General_Merchandise"));
    assert_eq!(rows.headers, vec!["Value"]);
    assert_eq!(rows.rows, vec![vec!["Shopping/General_Merchandise".to_string()]]);

    let rows = build_rows(&json!(["google.com", "yahoo.com"]));
    assert_eq!(rows.headers, vec!["Value"]);
    assert_eq!(rows.rows.len(), 2);
}

#[test]
fn test_build_rows_null_is_empty_cell() {
    let rows = build_rows(&Value::Null);
    assert_eq!(rows.rows, vec![vec![String::new()]]);
}

// -- Envelope splitting --

#[test]
fn test_split_envelope_paged() {
    let value = load_fixture("referrals.json");
    let (focus, summary) = split_envelope(&value, "Data").unwrap();
    assert!(focus.is_array());
    assert!(summary.iter().any(|(k, v)| k == "TotalCount" && v == "2583"));
    assert!(summary.iter().all(|(k, _)| k != "Data"));
}

#[test]
fn test_split_envelope_requires_array() {
    let value = load_fixture("rank_and_reach.json");
    assert!(split_envelope(&value, "GlobalRank").is_none());
    assert!(split_envelope(&value, "Missing").is_none());
    assert!(split_envelope(&json!([1, 2]), "Data").is_none());
}

// -- Renderers --

#[test]
fn test_render_table_contains_cells() {
    let rows = build_rows(&json!([{"Site": "google.com", "Value": 0.5}]));
    let out = render_table(&rows);
    assert!(out.contains("Site"));
    assert!(out.contains("google.com"));
    assert!(out.contains("0.5"));
}

#[test]
fn test_render_markdown_uses_pipes() {
    let rows = build_rows(&json!([{"Site": "google.com"}]));
    let out = render_markdown(&rows);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('|'));
    assert!(lines[1].contains("---"));
    assert!(lines[2].contains("google.com"));
}

#[test]
fn test_write_csv() {
    let rows = build_rows(&json!([{"Domain": "a.com", "Score": 1}, {"Domain": "b,c", "Score": 2}]));
    let mut buf = Vec::new();
    write_csv(&rows, &mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "Domain,Score\na.com,1\n\"b,c\",2\n");
}
