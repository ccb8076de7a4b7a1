use crate::core::calculator::plan_ligation;
use crate::core::report::{render, ReportFormat};
use crate::core::{LigationRequest, PipettingLimits, ProtocolRecipe, ReportSink};
use crate::utils::error::{CalcError, Result};

/// Computes recipes for one or more samples and hands the rendered report to a sink.
///
/// Everything is rendered before the sink is touched, so a failing sample
/// leaves no partial output behind.
pub struct ProtocolEngine<S: ReportSink, L: PipettingLimits> {
    sink: S,
    limits: L,
    format: ReportFormat,
}

impl<S: ReportSink, L: PipettingLimits> ProtocolEngine<S, L> {
    pub fn new(sink: S, limits: L) -> Self {
        Self {
            sink,
            limits,
            format: ReportFormat::Text,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn run(&self, request: &LigationRequest) -> Result<ProtocolRecipe> {
        tracing::info!("Planning ligation for sample {}", request.name);
        let recipe = plan_ligation(request, &self.limits)?;
        let report = render(&recipe, self.format)?;

        self.sink.write_report(&report)?;
        tracing::info!("Protocol written to {}", self.sink.describe());
        Ok(recipe)
    }

    /// Sample-sheet rows are numbered from 1, not counting the header.
    pub fn run_batch(&self, requests: &[LigationRequest]) -> Result<Vec<ProtocolRecipe>> {
        tracing::info!("Planning ligations for {} samples", requests.len());

        let mut recipes = Vec::with_capacity(requests.len());
        let mut sections = Vec::with_capacity(requests.len());
        for (index, request) in requests.iter().enumerate() {
            let (recipe, text) = plan_ligation(request, &self.limits)
                .and_then(|recipe| render(&recipe, self.format).map(|text| (recipe, text)))
                .map_err(|e| CalcError::SampleSheetError {
                    row: index + 1,
                    source: Box::new(e),
                })?;
            sections.push(text);
            recipes.push(recipe);
        }

        self.sink.write_report(&sections.join("\n"))?;
        tracing::info!(
            "{} protocols written to {}",
            recipes.len(),
            self.sink.describe()
        );
        Ok(recipes)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
