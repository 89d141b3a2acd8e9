use anyhow::Result;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// Header row plus data rows, all cells already stringified.
#[derive(Debug, PartialEq)]
pub struct Rows {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

// -- Row builders --

/// Flattens a response value into rows.
///
/// Arrays of objects become one row per element, with columns from the
/// union of keys. Objects become key/value rows. Anything else is a single
/// `Value` column.
pub fn build_rows(value: &Value) -> Rows {
    match value {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            let mut headers: Vec<String> = Vec::new();
            for item in items.iter().filter_map(Value::as_object) {
                for key in item.keys() {
                    if !headers.iter().any(|h| h == key) {
                        headers.push(key.clone());
                    }
                }
            }
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|item| {
                    headers
                        .iter()
                        .map(|h| item.get(h).map(format_cell).unwrap_or_default())
                        .collect()
                })
                .collect();
            Rows { headers, rows }
        }
        Value::Array(items) => Rows {
            headers: vec!["Value".to_string()],
            rows: items.iter().map(|item| vec![format_cell(item)]).collect(),
        },
        Value::Object(map) => Rows {
            headers: vec!["Key".to_string(), "Value".to_string()],
            rows: map
                .iter()
                .map(|(key, value)| vec![key.clone(), format_cell(value)])
                .collect(),
        },
        scalar => Rows {
            headers: vec!["Value".to_string()],
            rows: vec![vec![format_cell(scalar)]],
        },
    }
}

/// Splits an envelope into the array under `key` and its remaining scalar fields.
///
/// Returns `None` when `value` is not an object holding an array at `key`.
pub fn split_envelope<'a>(
    value: &'a Value,
    key: &str,
) -> Option<(&'a Value, Vec<(String, String)>)> {
    let map = value.as_object()?;
    let focus = map.get(key).filter(|v| v.is_array())?;
    let summary = map
        .iter()
        .filter(|(k, v)| k.as_str() != key && !v.is_array() && !v.is_object())
        .map(|(k, v)| (k.clone(), format_cell(v)))
        .collect();
    Some((focus, summary))
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

fn build_table(rows: &Rows) -> Table {
    let mut builder = Builder::default();
    builder.push_record(rows.headers.clone());
    for row in &rows.rows {
        builder.push_record(row.clone());
    }
    builder.build()
}

// -- Table output --

pub fn render_table(rows: &Rows) -> String {
    build_table(rows).to_string()
}

// -- Markdown output --

pub fn render_markdown(rows: &Rows) -> String {
    let mut table = build_table(rows);
    table.with(Style::markdown());
    table.to_string()
}

// -- CSV output --

pub fn write_csv<W: std::io::Write>(rows: &Rows, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&rows.headers)?;
    for row in &rows.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Prints `value` in `format`. For table-like formats, `rows_key` selects the
/// list to tabulate; sibling scalar fields are reported on stderr.
pub fn print_value(value: &Value, format: &OutputFormat, rows_key: Option<&str>) -> Result<()> {
    let target = match rows_key.and_then(|key| split_envelope(value, key)) {
        Some((focus, summary)) if *format != OutputFormat::Json => {
            for (key, val) in summary {
                eprintln!("{}: {}", key, val);
            }
            focus
        }
        _ => value,
    };

    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => println!("{}", render_table(&build_rows(target))),
        OutputFormat::Markdown => println!("{}", render_markdown(&build_rows(target))),
        OutputFormat::Csv => write_csv(&build_rows(target), std::io::stdout())?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
