//! Minimal CSV assembly for the analytics export.

/// Render a header row plus data rows, RFC 4180 quoting where needed.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut output = String::new();

    let escaped: Vec<String> = headers.iter().map(|h| escape_field(h)).collect();
    output.push_str(&escaped.join(","));
    output.push('\n');

    for row in rows {
        let escaped: Vec<String> = row.iter().map(|f| escape_field(f)).collect();
        output.push_str(&escaped.join(","));
        output.push('\n');
    }

    output
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
