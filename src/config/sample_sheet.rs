use crate::config::toml_config::ProtocolConfig;
use crate::core::{DnaQuantification, LigationRequest};
use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One row of a CSV sample sheet. Empty optional cells fall back to the
/// protocol defaults, the same as omitted CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    pub name: String,
    pub volume: f64,
    pub concentration: f64,
    pub stock: f64,
    #[serde(default)]
    pub molarity: Option<f64>,
    #[serde(default)]
    pub fragmass: Option<f64>,
    #[serde(default)]
    pub excess: Option<f64>,
    #[serde(default)]
    pub adapter: Option<f64>,
    #[serde(default)]
    pub adapterid: Option<String>,
    #[serde(default)]
    pub working: Option<f64>,
}

impl SampleRow {
    pub fn to_request(&self, protocol: &ProtocolConfig) -> Result<LigationRequest> {
        let quantification = DnaQuantification::from_options(self.molarity, self.fragmass)
            .ok_or(CalcError::MissingQuantification)?;

        Ok(LigationRequest {
            name: self.name.clone(),
            dna_volume: self.volume,
            dna_concentration: self.concentration,
            stock_molarity: self.stock,
            quantification,
            excess: self.excess.unwrap_or_else(|| protocol.excess()),
            adapter_volume: self.adapter.unwrap_or_else(|| protocol.adapter_volume()),
            adapter_id: self.adapterid.clone().unwrap_or_default(),
            working_volume: self.working.unwrap_or_else(|| protocol.working_volume()),
        })
    }
}

pub fn read_sample_sheet<P: AsRef<Path>>(path: P) -> Result<Vec<SampleRow>> {
    let file = std::fs::File::open(path.as_ref())?;
    parse_sample_sheet(file)
}

/// Rows are numbered from 1 in errors, not counting the header.
pub fn parse_sample_sheet<R: Read>(reader: R) -> Result<Vec<SampleRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in csv_reader.deserialize::<SampleRow>().enumerate() {
        let row = record.map_err(|e| CalcError::SampleSheetError {
            row: index + 1,
            source: Box::new(CalcError::CsvError(e)),
        })?;
        rows.push(row);
    }

    tracing::debug!("Read {} samples from sample sheet", rows.len());
    Ok(rows)
}

/// Converts every row, stopping at the first one that cannot become a request.
pub fn to_requests(rows: &[SampleRow], protocol: &ProtocolConfig) -> Result<Vec<LigationRequest>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            row.to_request(protocol)
                .map_err(|e| CalcError::SampleSheetError {
                    row: index + 1,
                    source: Box::new(e),
                })
        })
        .collect()
}
