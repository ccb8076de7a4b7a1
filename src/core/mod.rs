pub mod calculator;
pub mod engine;
pub mod fasta;
pub mod refine;
pub mod report;

pub use crate::domain::model::{
    DilutionRecipe, DnaQuantification, FastaRecord, LigationRecipe, LigationRequest,
    ProtocolRecipe,
};
pub use crate::domain::ports::{PipettingLimits, ReportSink};
pub use crate::utils::error::Result;
