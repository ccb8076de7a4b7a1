use serde::{Deserialize, Serialize};

/// How the DNA sample was quantified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnaQuantification {
    /// Molarity in pmol/µl.
    Molarity(f64),
    /// Average fragment mass in ng/fmol.
    FragmentMass(f64),
}

impl DnaQuantification {
    /// Molarity wins when both were measured.
    pub fn from_options(molarity: Option<f64>, fragment_mass: Option<f64>) -> Option<Self> {
        match (molarity, fragment_mass) {
            (Some(m), _) => Some(DnaQuantification::Molarity(m)),
            (None, Some(f)) => Some(DnaQuantification::FragmentMass(f)),
            (None, None) => None,
        }
    }

    /// DNA molarity in pmol/µl for a sample at `concentration` ng/µl.
    pub fn molarity(&self, concentration: f64) -> f64 {
        match *self {
            DnaQuantification::Molarity(m) => m,
            DnaQuantification::FragmentMass(mass) => concentration / (mass * 1000.0),
        }
    }
}

/// Everything needed to plan one sample's adapter dilution and ligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LigationRequest {
    pub name: String,
    /// µl
    pub dna_volume: f64,
    /// ng/µl
    pub dna_concentration: f64,
    /// µM
    pub stock_molarity: f64,
    pub quantification: DnaQuantification,
    pub excess: f64,
    /// Target adapter volume per reaction, µl.
    pub adapter_volume: f64,
    pub adapter_id: String,
    /// Target volume of adapter working solution, µl.
    pub working_volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DilutionRecipe {
    pub adapter_id: String,
    pub working_molarity: f64,
    pub stock_molarity: f64,
    pub stock_volume: f64,
    pub anneal_buffer_volume: f64,
    pub working_volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LigationRecipe {
    pub sample: String,
    pub dna_molarity: f64,
    pub dna_volume: f64,
    pub ligase_buffer_volume: f64,
    pub adapter_id: String,
    pub adapter_molarity: f64,
    pub adapter_volume: f64,
    pub salt_volume: f64,
    pub ligase_volume: f64,
    pub water_volume: f64,
    pub total_volume: f64,
}

impl LigationRecipe {
    /// Sum of every pipetted component, including water.
    pub fn component_sum(&self) -> f64 {
        self.dna_volume
            + self.ligase_buffer_volume
            + self.adapter_volume
            + self.salt_volume
            + self.ligase_volume
            + self.water_volume
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolRecipe {
    pub dilution: DilutionRecipe,
    pub ligation: LigationRecipe,
}

/// One FASTA record. `header` is the full line after `>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }
}
