use crate::utils::error::Result;

/// Destination for a rendered report.
pub trait ReportSink {
    fn write_report(&self, report: &str) -> Result<()>;

    /// Human-readable description used in log lines.
    fn describe(&self) -> String;
}

/// Pipetting limits the calculator works within.
pub trait PipettingLimits {
    /// Smallest volume (µl) that can be pipetted reliably.
    fn minimum_volume(&self) -> f64;
    fn adapter_step(&self) -> f64;
    fn working_step(&self) -> f64;
    fn max_steps(&self) -> u32;
}
