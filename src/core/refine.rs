//! Bounded stepwise refinement.
//!
//! A quantity is raised from `initial` in fixed increments until a predicate
//! holds. Candidates are computed as `initial + k * step` rather than by
//! repeated addition, so the k-th candidate does not depend on rounding
//! accumulated over earlier steps.

use crate::utils::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refined {
    pub value: f64,
    pub steps: u32,
}

/// Returns the first candidate `initial + k * step` (`k` in `0..=max_steps`)
/// for which `accept` holds.
///
/// `accept` must be monotone in the candidate (once true, true for every
/// larger value) for the result to be the smallest acceptable one. Fails with
/// [`CalcError::RefinementExhausted`] when no candidate within `max_steps` is
/// accepted.
pub fn refine_upward<F>(
    quantity: &str,
    initial: f64,
    step: f64,
    max_steps: u32,
    accept: F,
) -> Result<Refined>
where
    F: Fn(f64) -> bool,
{
    if !(step > 0.0 && step.is_finite()) {
        return Err(CalcError::invalid_input(
            &format!("{} step", quantity),
            step,
            "Step must be a positive, finite number",
        ));
    }

    for k in 0..=max_steps {
        let value = initial + f64::from(k) * step;
        if accept(value) {
            if k > 0 {
                tracing::debug!("Adjusted {} to {} after {} steps", quantity, value, k);
            }
            return Ok(Refined { value, steps: k });
        }
    }

    Err(CalcError::RefinementExhausted {
        quantity: quantity.to_string(),
        max_steps,
    })
}
