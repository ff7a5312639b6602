//! CSV projection of the batch summary table.

use crate::models::SummaryRow;

/// Header row of the exported table.
pub const CSV_HEADER: &str = "URL,Title,Word Count";

/// Materializes the summary rows as CSV: a header row followed by one
/// comma-separated row per page. Fields containing the delimiter, a quote,
/// or a line break are quoted, with embedded quotes doubled.
#[must_use]
pub fn to_csv(rows: &[SummaryRow]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for row in rows {
        out.push_str(&escape_field(&row.url));
        out.push(',');
        out.push_str(&escape_field(&row.title));
        out.push(',');
        out.push_str(&row.word_count.to_string());
        out.push('\n');
    }

    out
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Derives a CSV filename from the search query, mapping bytes a
/// filesystem could object to onto underscores.
#[must_use]
pub fn csv_filename(query: &str) -> String {
    let slug: String = query
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("seo_analysis_{slug}.csv")
}
