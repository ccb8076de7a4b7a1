use crate::core::refine::refine_upward;
use crate::core::{
    DilutionRecipe, DnaQuantification, LigationRecipe, LigationRequest, PipettingLimits,
    ProtocolRecipe,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_quantity, Validate};

/// Ligase buffer is supplied at 10X.
pub const LIGASE_BUFFER_FOLD: f64 = 10.0;
/// 1.5 M NaCl is roughly a 40X stock.
pub const SALT_FOLD: f64 = 40.0;
/// T4 DNA ligase added per reaction, µl.
pub const LIGASE_VOLUME: f64 = 2.0;

impl Validate for LigationRequest {
    fn validate(&self) -> Result<()> {
        validate_positive_quantity("volume", self.dna_volume)?;
        validate_positive_quantity("concentration", self.dna_concentration)?;
        validate_positive_quantity("stock", self.stock_molarity)?;
        match self.quantification {
            DnaQuantification::Molarity(m) => validate_positive_quantity("molarity", m)?,
            DnaQuantification::FragmentMass(f) => validate_positive_quantity("fragmass", f)?,
        }
        validate_positive_quantity("excess", self.excess)?;
        validate_positive_quantity("adapter", self.adapter_volume)?;
        validate_positive_quantity("working", self.working_volume)?;
        Ok(())
    }
}

/// Plans the adapter working dilution and the ligation reaction for one sample.
///
/// The request is validated first, so non-positive or non-finite inputs never
/// reach the refinement loops.
pub fn plan_ligation<L: PipettingLimits + ?Sized>(
    request: &LigationRequest,
    limits: &L,
) -> Result<ProtocolRecipe> {
    request.validate()?;

    let dna_molarity = request.quantification.molarity(request.dna_concentration);
    // Each double-stranded fragment offers two ligatable ends.
    let ends_pmol = 2.0 * dna_molarity * request.dna_volume;
    let adapter_pmol = request.excess * ends_pmol;
    tracing::debug!(
        "Sample {}: DNA {:.4} pmol/µl, {:.4} pmol ends, {:.4} pmol adapter",
        request.name,
        dna_molarity,
        ends_pmol,
        adapter_pmol
    );

    // The working solution can never be more concentrated than the stock.
    let stock_molarity = request.stock_molarity;
    let adapter_volume = refine_upward(
        "adapter volume",
        request.adapter_volume,
        limits.adapter_step(),
        limits.max_steps(),
        |volume| adapter_pmol / volume <= stock_molarity,
    )?
    .value;
    let working_molarity = adapter_pmol / adapter_volume;

    // Grow the working volume until the stock aliquot is pipettable.
    let minimum_volume = limits.minimum_volume();
    let working_volume = refine_upward(
        "working volume",
        request.working_volume,
        limits.working_step(),
        limits.max_steps(),
        |volume| working_molarity * volume / stock_molarity >= minimum_volume,
    )?
    .value;
    let stock_volume = working_molarity * working_volume / stock_molarity;

    let dilution = DilutionRecipe {
        adapter_id: request.adapter_id.clone(),
        working_molarity,
        stock_molarity,
        stock_volume,
        anneal_buffer_volume: working_volume - stock_volume,
        working_volume,
    };

    let total_volume = ((request.dna_volume + LIGASE_VOLUME + adapter_volume)
        / (1.0 - 1.0 / LIGASE_BUFFER_FOLD - 1.0 / SALT_FOLD))
        .ceil();
    let ligase_buffer_volume = total_volume / LIGASE_BUFFER_FOLD;
    let salt_volume = total_volume / SALT_FOLD;
    let water_volume = total_volume
        - (request.dna_volume + ligase_buffer_volume + adapter_volume + salt_volume + LIGASE_VOLUME);

    let ligation = LigationRecipe {
        sample: request.name.clone(),
        dna_molarity,
        dna_volume: request.dna_volume,
        ligase_buffer_volume,
        adapter_id: request.adapter_id.clone(),
        adapter_molarity: working_molarity,
        adapter_volume,
        salt_volume,
        ligase_volume: LIGASE_VOLUME,
        water_volume,
        total_volume,
    };

    Ok(ProtocolRecipe { dilution, ligation })
}
