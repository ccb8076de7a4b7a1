use crate::core::ProtocolRecipe;
use crate::utils::error::Result;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    /// Bench protocol text
    #[default]
    Text,
    /// One JSON document per recipe
    Json,
}

pub fn render(recipe: &ProtocolRecipe, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(recipe)),
        ReportFormat::Json => render_json(recipe),
    }
}

/// Renders the dilution and ligation recipes as the fixed-width bench protocol.
pub fn render_text(recipe: &ProtocolRecipe) -> String {
    let d = &recipe.dilution;
    let l = &recipe.ligation;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{:.2} µM working solution of annealed adapter {}:",
        d.working_molarity, d.adapter_id
    );
    let _ = writeln!(out, "   1X annealing buffer:    {:>6.3} µl", d.anneal_buffer_volume);
    let _ = writeln!(
        out,
        "   {:.2} µM adapter stock: {:>6.3} µl",
        d.stock_molarity, d.stock_volume
    );
    let _ = writeln!(out, "   Total volume            {:>6.3} µl\n", d.working_volume);

    let _ = writeln!(out, "Ligation reaction for sample {}:", l.sample);
    let _ = writeln!(
        out,
        "   {:.3} µM digested DNA:     {:>6.3} µl",
        l.dna_molarity, l.dna_volume
    );
    let _ = writeln!(out, "   10X ligase buffer:         {:>6.3} µl", l.ligase_buffer_volume);
    let _ = writeln!(
        out,
        "   {:.3} µM adapter {:>3}:      {:>6.3} µl",
        l.adapter_molarity, l.adapter_id, l.adapter_volume
    );
    let _ = writeln!(out, "   1.5M (~40X) NaCl:          {:>6.3} µl", l.salt_volume);
    let _ = writeln!(out, "   T4 DNA ligase 2000000 U/ml:{:>6.3} µl", l.ligase_volume);
    let _ = writeln!(out, "   Water:                     {:>6.3} µl", l.water_volume);
    let _ = writeln!(out, "   Total volume:              {:>6.3} µl", l.total_volume);

    out
}

pub fn render_json(recipe: &ProtocolRecipe) -> Result<String> {
    let mut json = serde_json::to_string_pretty(recipe)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DilutionRecipe, LigationRecipe};

    fn sample_recipe() -> ProtocolRecipe {
        ProtocolRecipe {
            dilution: DilutionRecipe {
                adapter_id: "A1".to_string(),
                working_molarity: 2.0,
                stock_molarity: 2.0,
                stock_volume: 10.0,
                anneal_buffer_volume: 0.0,
                working_volume: 10.0,
            },
            ligation: LigationRecipe {
                sample: "S1".to_string(),
                dna_molarity: 0.05,
                dna_volume: 10.0,
                ligase_buffer_volume: 2.0,
                adapter_id: "A1".to_string(),
                adapter_molarity: 2.0,
                adapter_volume: 5.0,
                salt_volume: 0.5,
                ligase_volume: 2.0,
                water_volume: 0.5,
                total_volume: 20.0,
            },
        }
    }

    #[test]
    fn test_render_text_layout() {
        let expected = "\
2.00 µM working solution of annealed adapter A1:
   1X annealing buffer:     0.000 µl
   2.00 µM adapter stock: 10.000 µl
   Total volume            10.000 µl

Ligation reaction for sample S1:
   0.050 µM digested DNA:     10.000 µl
   10X ligase buffer:          2.000 µl
   2.000 µM adapter  A1:       5.000 µl
   1.5M (~40X) NaCl:           0.500 µl
   T4 DNA ligase 2000000 U/ml: 2.000 µl
   Water:                      0.500 µl
   Total volume:              20.000 µl
";
        assert_eq!(render_text(&sample_recipe()), expected);
    }

    #[test]
    fn test_render_json_has_both_sections() {
        let json = render(&sample_recipe(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["dilution"]["adapter_id"], "A1");
        assert_eq!(value["ligation"]["total_volume"], 20.0);
        assert!(json.ends_with('\n'));
    }
}
