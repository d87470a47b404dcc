//! Table and CSV rendering for list output

use tabled::builder::Builder;
use tabled::settings::Style;

/// Render header and rows as a boxed terminal table.
///
/// Cells must be plain text; ANSI styling would break the width
/// calculation.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row.clone());
    }
    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// Render header and rows as RFC 4180 CSV.
pub fn render_csv(headers: &[&str], rows: &[Vec<String>]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
