// src/io/reads.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use flate2::read::MultiGzDecoder;
use serde::Serialize;
use tracing::{info, warn};

use crate::reads::ReadRegistry;

/// Lines starting with this marker are headers, not sequence.
pub const HEADER_MARKER: char = '>';

/// What happened to each input line while loading reads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub lines: usize,
    pub headers: usize,
    pub blank: usize,
    pub non_ascii: usize,
    pub duplicates: usize,
}

/// Opens a plain or gzipped (`.gz`) text file.
pub fn open_input(path: &str) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// One read per line; header and blank lines are skipped and every read is
/// uppercased. Identical reads share one registry entry.
pub fn parse_reads<R: BufRead>(reader: R) -> io::Result<(ReadRegistry, LoadReport)> {
    let mut registry = ReadRegistry::new();
    let mut report = LoadReport::default();

    for line in reader.lines() {
        let line = line?;
        report.lines += 1;
        let line = line.trim();
        if line.starts_with(HEADER_MARKER) {
            report.headers += 1;
            continue;
        }
        if line.is_empty() {
            report.blank += 1;
            continue;
        }
        if !line.is_ascii() {
            report.non_ascii += 1;
            continue;
        }
        let (_, inserted) = registry.insert(line.to_ascii_uppercase());
        if !inserted {
            report.duplicates += 1;
        }
    }

    if report.non_ascii > 0 {
        warn!("Skipped {} non-ASCII lines", report.non_ascii);
    }
    Ok((registry, report))
}

pub fn load_reads(path: &str) -> io::Result<(ReadRegistry, LoadReport)> {
    let (registry, report) = parse_reads(open_input(path)?)?;
    info!(
        "Loaded {} distinct reads from {} ({} duplicates collapsed)",
        registry.len(),
        path,
        report.duplicates
    );
    Ok((registry, report))
}

/// Concatenates every non-header line, uppercased.
pub fn parse_reference<R: BufRead>(reader: R) -> io::Result<String> {
    let mut sequence = String::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.starts_with(HEADER_MARKER) {
            continue;
        }
        sequence.push_str(&line.to_ascii_uppercase());
    }
    Ok(sequence)
}

pub fn load_reference(path: &str) -> io::Result<String> {
    let sequence = parse_reference(open_input(path)?)?;
    info!("Loaded {} bp reference from {}", sequence.len(), path);
    Ok(sequence)
}
