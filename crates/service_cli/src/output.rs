//! Output rendering: box-drawn tables, JSON and CSV

use clap::ValueEnum;
use serde::Serialize;

use crate::{CliError, Result};

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawn table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values, one block per section
    Csv,
}

/// A titled block of rows sharing one header.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Section {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Two-column `Metric | Value` section.
    pub fn key_value(title: impl Into<String>) -> Self {
        Self::new(title, &["Metric", "Value"])
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Appends a `label | value` row.
    pub fn kv(self, label: &str, value: impl Into<String>) -> Self {
        self.row([label.to_string(), value.into()])
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn render_table(&self) -> String {
        let n_cols = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(n_cols) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let border = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, segments.join(mid), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!(" {:<width$} ", cell, width = w)
                })
                .collect();
            format!("│{}│", padded.join("│"))
        };

        let mut out = Vec::with_capacity(self.rows.len() + 5);
        if !self.title.is_empty() {
            out.push(self.title.clone());
        }
        out.push(border("┌", "┬", "┐"));
        out.push(line(&self.headers));
        out.push(border("├", "┼", "┤"));
        for row in &self.rows {
            out.push(line(row));
        }
        out.push(border("└", "┴", "┘"));
        out.join("\n")
    }
}

/// Command output: human-readable sections plus a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sections: Vec<Section>,
    pub json: serde_json::Value,
}

impl Report {
    pub fn new<T: Serialize>(sections: Vec<Section>, data: &T) -> Result<Self> {
        Ok(Self {
            sections,
            json: serde_json::to_value(data)?,
        })
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self
                .sections
                .iter()
                .map(Section::render_table)
                .collect::<Vec<_>>()
                .join("\n\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.json)?),
            OutputFormat::Csv => self.render_csv(),
        }
    }

    fn render_csv(&self) -> Result<String> {
        let mut blocks = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let mut writer = csv::WriterBuilder::new()
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(Vec::new());
            writer.write_record(&section.headers)?;
            for row in &section.rows {
                writer.write_record(row)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| CliError::Output(e.to_string()))?;
            let block = String::from_utf8(bytes).map_err(|e| CliError::Output(e.to_string()))?;
            blocks.push(block.trim_end().to_string());
        }
        Ok(blocks.join("\n\n"))
    }
}

/// Six-decimal rendering; non-finite values print as `NaN`/`inf`.
pub fn num(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        value.to_string()
    } else {
        format!("{:.6}", value)
    }
}

/// As [`num`], with `-` for missing values.
pub fn opt_num(value: Option<f64>) -> String {
    value.map(num).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Report {
        let section = Section::key_value("Price")
            .kv("call", "4.759422")
            .row(["put, european", "0.808600"]);
        Report {
            sections: vec![section],
            json: json!({"call": 4.759422}),
        }
    }

    #[test]
    fn test_table_rendering() {
        let table = sample().render(OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Price");
        assert!(lines[1].starts_with('┌') && lines[1].ends_with('┐'));
        assert!(lines[2].contains("Metric") && lines[2].contains("Value"));
        assert!(lines[4].contains("call"));
        assert!(lines[6].starts_with('└'));
        let widths: Vec<usize> = lines[1..].iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_csv_rendering_quotes_commas() {
        let csv = sample().render(OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "Metric,Value\ncall,4.759422\n\"put, european\",0.808600"
        );
    }

    #[test]
    fn test_json_rendering() {
        let out = sample().render(OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["call"], 4.759422);
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(num(1.0), "1.000000");
        assert_eq!(num(f64::NAN), "NaN");
        assert_eq!(num(f64::INFINITY), "inf");
        assert_eq!(opt_num(None), "-");
        assert_eq!(opt_num(Some(0.25)), "0.250000");
    }
}
