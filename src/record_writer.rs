use crate::error::HuginnNetJa3Error;
use crate::output::Ja3Record;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use tracing::trace;

const CSV_COLUMNS: [&str; 6] = [
    "timestamp",
    "source_ip",
    "source_port",
    "destination_ip",
    "destination_port",
    "ja3_digest",
];
const JA3S_COLUMN: &str = "ja3s_digest";

/// How records are written to the output sink
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One pretty-printed JSON array, written when the writer is finished
    #[default]
    Json,
    /// One pretty-printed JSON object per record, newline terminated
    JsonLines,
    Csv { separator: String },
    Tsv,
}

fn write_pretty<T: Serialize + ?Sized, W: Write>(
    value: &T,
    out: &mut W,
) -> Result<(), HuginnNetJa3Error> {
    let mut serializer = Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(())
}

/// Write all records as one JSON array indented with four spaces
pub fn write_json_array<W: Write>(
    records: &[Ja3Record],
    out: &mut W,
) -> Result<(), HuginnNetJa3Error> {
    write_pretty(records, out)
}

/// Write a single record as a JSON object followed by a newline
pub fn write_json_line<W: Write>(record: &Ja3Record, out: &mut W) -> Result<(), HuginnNetJa3Error> {
    write_pretty(record, out)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Separator-delimited writer. The header row is written on construction.
pub struct CsvWriter<W: Write> {
    out: W,
    separator: String,
    include_ja3s: bool,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(
        mut out: W,
        separator: impl Into<String>,
        include_ja3s: bool,
    ) -> Result<Self, HuginnNetJa3Error> {
        let separator = separator.into();
        if separator.is_empty() || separator.contains(['\n', '\r']) {
            return Err(HuginnNetJa3Error::InvalidSeparator(separator));
        }

        let mut header = CSV_COLUMNS.join(separator.as_str());
        if include_ja3s {
            header.push_str(&separator);
            header.push_str(JA3S_COLUMN);
        }
        header.push('\n');
        out.write_all(header.as_bytes())?;

        Ok(Self {
            out,
            separator,
            include_ja3s,
        })
    }

    pub fn write_record(&mut self, record: &Ja3Record) -> Result<(), HuginnNetJa3Error> {
        let sep = &self.separator;
        let mut row = format!(
            "{:.6}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            record.timestamp,
            record.source_ip,
            record.source_port,
            record.destination_ip,
            record.destination_port,
            record.ja3_digest,
        );
        if self.include_ja3s {
            row.push_str(sep);
            row.push_str(&record.ja3s_digest);
        }
        row.push('\n');
        self.out.write_all(row.as_bytes())?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

enum Sink<W: Write> {
    JsonArray { out: W, records: Vec<Ja3Record> },
    JsonLines(W),
    Csv(CsvWriter<W>),
}

/// Writes records in the configured [`OutputFormat`]
pub struct RecordWriter<W: Write> {
    sink: Sink<W>,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W, format: &OutputFormat, include_ja3s: bool) -> Result<Self, HuginnNetJa3Error> {
        let sink = match format {
            OutputFormat::Json => Sink::JsonArray {
                out,
                records: Vec::new(),
            },
            OutputFormat::JsonLines => Sink::JsonLines(out),
            OutputFormat::Csv { separator } => {
                Sink::Csv(CsvWriter::new(out, separator.as_str(), include_ja3s)?)
            }
            OutputFormat::Tsv => Sink::Csv(CsvWriter::new(out, "\t", include_ja3s)?),
        };
        Ok(Self { sink, written: 0 })
    }

    pub fn write(&mut self, record: &Ja3Record) -> Result<(), HuginnNetJa3Error> {
        match &mut self.sink {
            Sink::JsonArray { records, .. } => records.push(record.clone()),
            Sink::JsonLines(out) => write_json_line(record, out)?,
            Sink::Csv(csv) => csv.write_record(record)?,
        }
        self.written += 1;
        Ok(())
    }

    /// Number of records accepted so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush pending output and hand back the sink
    pub fn finish(self) -> Result<W, HuginnNetJa3Error> {
        trace!("Finishing record writer after {} records", self.written);
        let mut out = match self.sink {
            Sink::JsonArray { mut out, records } => {
                write_json_array(&records, &mut out)?;
                out
            }
            Sink::JsonLines(out) => out,
            Sink::Csv(csv) => csv.into_inner(),
        };
        out.flush()?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_separator_rejected() {
        let result = CsvWriter::new(Vec::new(), "", false);
        assert!(matches!(result, Err(HuginnNetJa3Error::InvalidSeparator(_))));
    }

    #[test]
    fn test_newline_separator_rejected() {
        let result = CsvWriter::new(Vec::new(), "\n", false);
        assert!(matches!(result, Err(HuginnNetJa3Error::InvalidSeparator(_))));
    }

    #[test]
    fn test_header_columns() {
        let csv = CsvWriter::new(Vec::new(), ";", true).map(CsvWriter::into_inner);
        let bytes = csv.unwrap_or_default();
        assert_eq!(
            String::from_utf8_lossy(&bytes),
            "timestamp;source_ip;source_port;destination_ip;destination_port;ja3_digest;ja3s_digest\n"
        );
    }

    #[test]
    fn test_empty_json_array() {
        let mut out = Vec::new();
        assert!(write_json_array(&[], &mut out).is_ok());
        assert_eq!(String::from_utf8_lossy(&out), "[]");
    }
}
