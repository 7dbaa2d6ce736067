#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use mailprobe_lib::{DomainLabels, ReportRow, format_table};
#[cfg(feature = "with-csv")]
use mailprobe_lib::COLUMNS;

/// Flat, display-ready view of a [`ReportRow`].
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub email: String,
    pub domain_status: String,
    pub smtp_result: String,
    pub smtp_code: String,
    pub details: String,
}

impl OutputRecord {
    pub fn new(row: &ReportRow, labels: &DomainLabels) -> Self {
        let [email, domain_status, smtp_result, smtp_code, details] = row.columns(labels);
        Self {
            email,
            domain_status,
            smtp_result,
            smtp_code,
            details,
        }
    }

    #[cfg(feature = "with-csv")]
    fn fields(&self) -> [&str; 5] {
        [
            &self.email,
            &self.domain_status,
            &self.smtp_result,
            &self.smtp_code,
            &self.details,
        ]
    }
}

/// Rejects unknown `--format` values before any network work starts.
pub fn check_format(format: &str) -> Result<()> {
    match format {
        "table" | "json" | "ndjson" | "csv" => Ok(()),
        other => bail!("unknown --format '{other}', use: table|json|ndjson|csv"),
    }
}

pub fn write_report(rows: &[ReportRow], labels: &DomainLabels, cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "table" => {
            println!("{}", format_table(rows, labels));
            Ok(())
        }
        "json" => write_json(&records(rows, labels), cli),
        "ndjson" => write_ndjson(&records(rows, labels), cli),
        "csv" => write_csv(&records(rows, labels), cli),
        other => bail!("unknown --format '{other}', use: table|json|ndjson|csv"),
    }
}

fn records(rows: &[ReportRow], labels: &DomainLabels) -> Vec<OutputRecord> {
    rows.iter().map(|row| OutputRecord::new(row, labels)).collect()
}

#[cfg(feature = "with-serde")]
fn write_json(records: &[OutputRecord], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(records)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[OutputRecord], _: &Cli) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(records: &[OutputRecord], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for record in records {
            let line = serde_json::to_string(record)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for record in records {
            println!("{}", serde_json::to_string(record)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[OutputRecord], _: &Cli) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv(records: &[OutputRecord], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let data = csv_bytes(records)?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(COLUMNS)?;
        for record in records {
            wtr.write_record(record.fields())?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(feature = "with-csv")]
fn csv_bytes(records: &[OutputRecord]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.write_record(record.fields())?;
    }
    Ok(wtr.into_inner()?)
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[OutputRecord], _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
