// 📄 Report Export - one-row tabulated record of a disaster
//
// The row layout is fixed. Column order and header text are what
// downstream consumers of the exported file read:
//
//   Name | Location | Date | Deaths(Male) | Deaths(Female) |
//   Injured(Male) | Injured(Female) | Damage(%)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Column headers in export order
pub const REPORT_COLUMNS: [&str; 8] = [
    "Name",
    "Location",
    "Date",
    "Deaths(Male)",
    "Deaths(Female)",
    "Injured(Male)",
    "Injured(Female)",
    "Damage(%)",
];

// ============================================================================
// REPORT ROW
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Deaths(Male)")]
    pub deaths_male: u32,

    #[serde(rename = "Deaths(Female)")]
    pub deaths_female: u32,

    #[serde(rename = "Injured(Male)")]
    pub injured_male: u32,

    #[serde(rename = "Injured(Female)")]
    pub injured_female: u32,

    /// Parsed back out of the damage descriptor; 0.0 when none recorded
    #[serde(rename = "Damage(%)")]
    pub damage_percent: f64,
}

impl ReportRow {
    /// Cell values in column order, plus whether each cell is numeric
    fn cells(&self) -> [(String, bool); 8] {
        [
            (self.name.clone(), false),
            (self.location.clone(), false),
            (self.date.clone(), false),
            (self.deaths_male.to_string(), true),
            (self.deaths_female.to_string(), true),
            (self.injured_male.to_string(), true),
            (self.injured_female.to_string(), true),
            (self.damage_percent.to_string(), true),
        ]
    }
}

// ============================================================================
// SINKS
// ============================================================================

/// Destination for an exported report row
pub trait ReportSink {
    fn write_row(&mut self, row: &ReportRow) -> Result<()>;
}

/// Output format for `save_row`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Space-aligned plain text table
    #[default]
    Plain,
    /// Comma separated values with a header record
    Csv,
}

/// Plain text table: header line and one value line, columns padded to their
/// terminal display width. Text columns are left-aligned, numeric columns
/// right-aligned. Floats print in shortest form (`35`, `12.35`).
pub struct TabulatedSink<W: Write> {
    writer: W,
}

impl<W: Write> TabulatedSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TabulatedSink<W> {
    fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        let cells = row.cells();

        let mut header = Vec::with_capacity(cells.len());
        let mut values = Vec::with_capacity(cells.len());

        for (column, (value, numeric)) in REPORT_COLUMNS.iter().zip(cells.iter()) {
            let width = column.width().max(value.width());
            header.push(pad_cell(column, width, *numeric));
            values.push(pad_cell(value, width, *numeric));
        }

        writeln!(self.writer, "{}", header.join("  ").trim_end())
            .context("Failed to write report header")?;
        writeln!(self.writer, "{}", values.join("  ").trim_end())
            .context("Failed to write report row")?;
        self.writer.flush().context("Failed to flush report")?;

        Ok(())
    }
}

// `{:<width$}` counts chars, so wide glyphs (CJK, emoji) are padded by hand
fn pad_cell(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right_align {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}

/// CSV output through the `csv` crate; header comes from the serde renames
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        self.writer
            .serialize(row)
            .context("Failed to serialize report row")?;
        self.writer.flush().context("Failed to flush CSV report")?;
        Ok(())
    }
}

/// Write `row` to the file at `path` in the requested format (truncates)
pub fn save_row(path: &Path, format: ReportFormat, row: &ReportRow) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    let written = match format {
        ReportFormat::Plain => TabulatedSink::new(writer).write_row(row),
        ReportFormat::Csv => CsvSink::new(writer).write_row(row),
    };
    written.with_context(|| format!("Failed to export report to {}", path.display()))?;

    tracing::info!(path = %path.display(), ?format, "report saved");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ReportRow {
        ReportRow {
            name: "Earthquake".to_string(),
            location: "Coastal South".to_string(),
            date: "2023-11-12 08:30:00".to_string(),
            deaths_male: 5,
            deaths_female: 5,
            injured_male: 12,
            injured_female: 8,
            damage_percent: 35.0,
        }
    }

    #[test]
    fn test_tabulated_sink_layout() {
        let mut sink = TabulatedSink::new(Vec::new());
        sink.write_row(&sample_row()).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        // Header keeps exact column order
        let headers: Vec<&str> = lines[0].split_whitespace().collect();
        assert_eq!(headers, REPORT_COLUMNS.to_vec());

        assert!(lines[1].starts_with("Earthquake  Coastal South  2023-11-12 08:30:00"));
        assert!(lines[1].ends_with("  35"));
    }

    #[test]
    fn test_tabulated_sink_aligns_columns() {
        let mut sink = TabulatedSink::new(Vec::new());
        sink.write_row(&sample_row()).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // Right-aligned numeric column ends where its header ends
        let header_end = lines[0].find("Deaths(Male)").unwrap() + "Deaths(Male)".len();
        assert_eq!(&lines[1][header_end - 1..header_end], "5");
    }

    #[test]
    fn test_tabulated_damage_uses_shortest_float_form() {
        let mut row = sample_row();
        row.damage_percent = 12.35;

        let mut sink = TabulatedSink::new(Vec::new());
        sink.write_row(&row).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let value_line = text.lines().nth(1).unwrap();
        assert!(value_line.ends_with(" 12.35"));
        assert!(!value_line.contains("12.350"));
    }

    #[test]
    fn test_tabulated_sink_aligns_wide_characters() {
        let mut row = sample_row();
        row.name = "地震".to_string();
        row.location = "東京".to_string();

        let mut sink = TabulatedSink::new(Vec::new());
        sink.write_row(&row).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // Every column starts at the same display offset on both lines
        let header_offset = lines[0].find("Location").unwrap();
        let value_offset = lines[1].find("東京").unwrap();
        assert_eq!(lines[0][..header_offset].width(), lines[1][..value_offset].width());
        assert_eq!(lines[0].width(), lines[1].width());
    }

    #[test]
    fn test_csv_sink_writes_header_and_row() {
        let mut sink = CsvSink::new(Vec::new());
        sink.write_row(&sample_row()).unwrap();

        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], REPORT_COLUMNS.join(","));
        assert_eq!(lines[1], "Earthquake,Coastal South,2023-11-12 08:30:00,5,5,12,8,35.0");
    }

    #[test]
    fn test_csv_output_reads_back() {
        let mut sink = CsvSink::new(Vec::new());
        sink.write_row(&sample_row()).unwrap();
        let bytes = sink.into_inner().unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let rows: Vec<ReportRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows, vec![sample_row()]);
    }

    #[test]
    fn test_save_row_to_file() {
        let path = std::env::temp_dir().join(format!("disaster_report_{}.txt", uuid::Uuid::new_v4()));

        save_row(&path, ReportFormat::Plain, &sample_row()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Name"));
        assert!(text.contains("Coastal South"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_row_to_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join(format!("missing_{}", uuid::Uuid::new_v4()))
            .join("report.txt");

        let err = save_row(&path, ReportFormat::Csv, &sample_row()).unwrap_err();
        assert!(err.to_string().contains("Failed to create report file"));
    }

    #[test]
    fn test_report_format_deserializes_lowercase() {
        let format: ReportFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(format, ReportFormat::Csv);
        assert_eq!(ReportFormat::default(), ReportFormat::Plain);
    }
}
