//! Minimal FASTA reading and writing.
//!
//! ```text
//! >seq1 optional description
//! ACGTACGTACGT
//! ACGT
//! >seq2
//! TTGCA
//! ```
//!
//! Sequence lines are concatenated per record and blank lines are skipped.
//! Writing wraps sequences at a fixed width (60 by default).

use crate::core::FastaRecord;
use crate::utils::error::{CalcError, Result};
use std::io::{BufRead, Write};

pub const DEFAULT_LINE_WIDTH: usize = 60;

pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(FastaRecord {
                header: header.trim().to_string(),
                sequence: String::new(),
            });
        } else {
            match current.as_mut() {
                Some(record) => record.sequence.push_str(line.trim()),
                None => {
                    return Err(CalcError::FastaParseError {
                        line: index + 1,
                        message: "Sequence data before the first '>' header".to_string(),
                    })
                }
            }
        }
    }

    if let Some(record) = current {
        records.push(record);
    }

    tracing::debug!("Parsed {} FASTA records", records.len());
    Ok(records)
}

/// Writes records as FASTA. A `width` of zero puts each sequence on one line.
pub fn write_fasta<W: Write>(writer: &mut W, records: &[FastaRecord], width: usize) -> Result<()> {
    for record in records {
        writeln!(writer, ">{}", record.header)?;
        if record.sequence.is_empty() {
            continue;
        }
        if width == 0 {
            writeln!(writer, "{}", record.sequence)?;
            continue;
        }
        // Sequences are ASCII; anything else is written byte-chunked as-is.
        for chunk in record.sequence.as_bytes().chunks(width) {
            writer.write_all(chunk)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}
