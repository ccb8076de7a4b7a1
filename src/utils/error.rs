use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Please, specify either DNA molarity (pmol/µl) or the average DNA fragment molecular mass (ng/fmol)")]
    MissingQuantification,

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Could not adjust {quantity} within {max_steps} steps")]
    RefinementExhausted { quantity: String, max_steps: u32 },

    #[error("FASTA parse error at line {line}: {message}")]
    FastaParseError { line: usize, message: String },

    #[error("Sample sheet row {row}: {source}")]
    SampleSheetError {
        row: usize,
        #[source]
        source: Box<CalcError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Computation,
    Format,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: &str) -> Self {
        CalcError::InvalidInputError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::MissingQuantification | CalcError::InvalidInputError { .. } => {
                ErrorCategory::Input
            }
            CalcError::RefinementExhausted { .. } => ErrorCategory::Computation,
            CalcError::CsvError(_)
            | CalcError::SerializationError(_)
            | CalcError::TomlError(_)
            | CalcError::FastaParseError { .. } => ErrorCategory::Format,
            CalcError::IoError(_) => ErrorCategory::System,
            CalcError::SampleSheetError { source, .. } => source.category(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Format | ErrorCategory::Computation => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a binary that fails with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::MissingQuantification => self.to_string(),
            CalcError::InvalidInputError { field, value, reason } => {
                format!("Invalid {}: {} ({})", field, value, reason)
            }
            CalcError::RefinementExhausted { quantity, .. } => {
                format!("The {} could not be brought into a usable range", quantity)
            }
            CalcError::IoError(e) => format!("File operation failed: {}", e),
            CalcError::SampleSheetError { row, source } => {
                format!("Sample sheet row {}: {}", row, source.user_friendly_message())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::MissingQuantification => {
                "Pass --molarity <pmol/µl> or --fragmass <ng/fmol>".to_string()
            }
            CalcError::InvalidInputError { field, .. } => {
                format!("Check that '{}' is a positive, finite number", field)
            }
            CalcError::RefinementExhausted { .. } => {
                "Check the stock molarity and DNA quantification for unit mistakes".to_string()
            }
            CalcError::IoError(_) => "Check that the path exists and is writable".to_string(),
            CalcError::CsvError(_) => {
                "Check that the sample sheet has a header row and comma-separated columns"
                    .to_string()
            }
            CalcError::TomlError(_) => "Check the protocol configuration syntax".to_string(),
            CalcError::SerializationError(_) => "Report this as a bug".to_string(),
            CalcError::FastaParseError { .. } => {
                "Check that every record starts with a '>' header line".to_string()
            }
            CalcError::SampleSheetError { source, .. } => source.recovery_suggestion(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
