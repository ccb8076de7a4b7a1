pub mod cli;
pub mod sample_sheet;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;
use toml_config::ProtocolConfig;

#[cfg(feature = "cli")]
use crate::core::report::ReportFormat;
#[cfg(feature = "cli")]
use crate::core::{DnaQuantification, LigationRequest};
#[cfg(feature = "cli")]
use crate::utils::error::CalcError;
#[cfg(feature = "cli")]
use crate::utils::validation::validate_path;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ligation-calc")]
#[command(about = "Adapter working dilution and ligation reaction calculator")]
pub struct CalcArgs {
    /// Sample name
    pub name: String,

    /// DNA volume in µl.
    pub volume: f64,

    /// DNA concentration in ng/µl.
    pub concentration: f64,

    /// Annealed adapter stock molarity in µM or pmol/µl.
    pub stock: f64,

    /// DNA molarity in pmol/µl.
    #[arg(short, long)]
    pub molarity: Option<f64>,

    /// Average fragment mass in ng/fmol.
    #[arg(short, long)]
    pub fragmass: Option<f64>,

    /// Target fold excess of adapters to DNA fragment ends. Default 10.
    #[arg(short, long)]
    pub excess: Option<f64>,

    /// Target adapter volume per reaction, in µl. Default 1 µl.
    #[arg(short, long)]
    pub adapter: Option<f64>,

    /// Identifier of the adapter to be used with this sample
    #[arg(short = 'i', long, default_value = "")]
    pub adapterid: String,

    /// Target volume of working stock of adapters to make, in µl. Default 10 µl.
    #[arg(short, long)]
    pub working: Option<f64>,

    /// Output file. Default, standard output
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Protocol configuration (TOML) with defaults and pipetting limits
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CalcArgs {
    /// Builds the request, filling unset options from the protocol defaults.
    pub fn to_request(&self, protocol: &ProtocolConfig) -> Result<LigationRequest> {
        if self.molarity.is_some() && self.fragmass.is_some() {
            tracing::warn!("Both --molarity and --fragmass given; using --molarity");
        }
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
            adapter_id: self.adapterid.clone(),
            working_volume: self.working.unwrap_or_else(|| protocol.working_volume()),
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for CalcArgs {
    fn validate(&self) -> Result<()> {
        if let Some(outfile) = &self.outfile {
            validate_path("outfile", &outfile.to_string_lossy())?;
        }
        if let Some(config) = &self.config {
            validate_path("config", &config.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Loads and validates the protocol file, or falls back to built-in defaults.
pub fn load_protocol(path: Option<&Path>) -> Result<ProtocolConfig> {
    let protocol = match path {
        Some(path) => {
            tracing::debug!("Loading protocol configuration from {}", path.display());
            ProtocolConfig::from_file(path)?
        }
        None => ProtocolConfig::default(),
    };
    protocol.validate()?;
    Ok(protocol)
}
