//! Theoretical Furnace Parameters
//!
//! Closed-form capacity-based sizing of a submerged-arc furnace. The chain
//! runs from transformer capacity to secondary voltage and current, then
//! back-solves the electrode diameter from the allowable current density,
//! and proportions every remaining dimension off the electrode diameter
//! via the empirical coefficient set.
//!
//! All formulas are total over strictly positive inputs; call
//! [`FurnaceInputs::validate`] (and `CoefficientSet::validate`) at the
//! boundary before invoking [`theoretical`].
//!
//! ## Example
//!
//! ```rust
//! use smelt_core::furnace::theoretical::{theoretical, FurnaceInputs};
//! use smelt_core::materials::SmeltingProduct;
//!
//! let inputs = FurnaceInputs {
//!     capacity_mva: 33.0,
//!     primary_kv: 35.0,
//!     lining_mm: 1200.0,
//! };
//! let coeffs = SmeltingProduct::SiliconManganese.coefficients();
//!
//! let theo = theoretical(&inputs, &coeffs);
//! assert!(theo.u2_v > 200.0 && theo.u2_v < 205.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::materials::CoefficientSet;

/// √3, for three-phase power relations
pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Fixed shell headroom above the hearth: freeboard, roof and charging
/// superstructure allowance (mm)
pub const SHELL_HEADROOM_MM: f64 = 2000.0;

/// Process inputs for one furnace design session.
///
/// Immutable once created; a changed input means a fresh full recompute,
/// never an in-place edit.
///
/// ## JSON Example
///
/// ```json
/// {
///   "capacity_mva": 33.0,
///   "primary_kv": 35.0,
///   "lining_mm": 1200.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FurnaceInputs {
    /// Transformer capacity (MVA)
    pub capacity_mva: f64,

    /// Primary-side line voltage (kV)
    pub primary_kv: f64,

    /// Average refractory lining thickness (mm)
    pub lining_mm: f64,
}

impl FurnaceInputs {
    /// Validate input parameters.
    pub fn validate(&self) -> DesignResult<()> {
        if self.capacity_mva <= 0.0 {
            return Err(DesignError::invalid_input(
                "capacity_mva",
                self.capacity_mva.to_string(),
                "Transformer capacity must be positive",
            ));
        }
        if self.primary_kv <= 0.0 {
            return Err(DesignError::invalid_input(
                "primary_kv",
                self.primary_kv.to_string(),
                "Primary voltage must be positive",
            ));
        }
        if self.lining_mm <= 0.0 {
            return Err(DesignError::invalid_input(
                "lining_mm",
                self.lining_mm.to_string(),
                "Lining thickness must be positive",
            ));
        }
        Ok(())
    }

    /// Transformer capacity in kVA
    pub fn capacity_kva(&self) -> f64 {
        self.capacity_mva * 1000.0
    }
}

/// Exact-valued design parameters.
///
/// Derived entirely from [`FurnaceInputs`] and the coefficient set; never
/// shown to the user as authoritative and never edited. The authoritative
/// working values live in
/// [`RoundedParameters`](crate::furnace::design::RoundedParameters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TheoreticalParameters {
    /// Primary-side line current I1 (A)
    pub i1_a: f64,
    /// Secondary (electrode) voltage U2 (V)
    pub u2_v: f64,
    /// Secondary current I2 (A)
    pub i2_a: f64,
    /// Electrode diameter De (mm)
    pub de_mm: f64,
    /// Pole-circle diameter Dc (mm)
    pub dc_mm: f64,
    /// Hearth inner diameter Di (mm)
    pub di_mm: f64,
    /// Hearth depth Hh (mm)
    pub hh_mm: f64,
    /// Shell inner diameter (mm)
    pub shell_id_mm: f64,
    /// Shell height (mm)
    pub shell_h_mm: f64,
}

/// Compute the theoretical parameter set.
///
/// Pure function: identical inputs give bitwise-identical outputs. All
/// divisions are by values the boundary validation guarantees positive.
///
/// Formula chain (P in kVA, lengths in mm):
///
/// - `U2 = Ke · P^(1/3)`
/// - `I2 = 1000·P / (√3 · U2)`
/// - `De = 10 · √(I2 / (J · π/4))` - electrode section back-solved from
///   current density (J in A/cm², hence the factor 10 to mm)
/// - `Dc = Ky·De`, `Di = Ki·De`, `Hh = Kh·De`
/// - `shell_ID = Di + 2·lining`, `shell_H = Hh + 2000`
pub fn theoretical(inputs: &FurnaceInputs, coeffs: &CoefficientSet) -> TheoreticalParameters {
    let p_kva = inputs.capacity_kva();

    let i1_a = 1000.0 * p_kva / (SQRT_3 * inputs.primary_kv * 1000.0);
    let u2_v = coeffs.ke * p_kva.powf(1.0 / 3.0);
    let i2_a = 1000.0 * p_kva / (SQRT_3 * u2_v);

    let de_mm = 10.0 * (i2_a / (coeffs.j * std::f64::consts::FRAC_PI_4)).sqrt();
    let dc_mm = coeffs.ky * de_mm;
    let di_mm = coeffs.ki * de_mm;
    let hh_mm = coeffs.kh * de_mm;

    TheoreticalParameters {
        i1_a,
        u2_v,
        i2_a,
        de_mm,
        dc_mm,
        di_mm,
        hh_mm,
        shell_id_mm: di_mm + 2.0 * inputs.lining_mm,
        shell_h_mm: hh_mm + SHELL_HEADROOM_MM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SmeltingProduct;

    fn test_inputs() -> FurnaceInputs {
        FurnaceInputs {
            capacity_mva: 33.0,
            primary_kv: 35.0,
            lining_mm: 1200.0,
        }
    }

    #[test]
    fn test_33mva_simn_scenario() {
        // Handbook check: U2 = 6.3 · 33000^(1/3) ≈ 202 V,
        // I2 = 33e6 / (√3 · U2) ≈ 94 kA
        let theo = theoretical(&test_inputs(), &SmeltingProduct::SiliconManganese.coefficients());

        assert!((theo.u2_v - 202.5).abs() < 2.0, "U2 = {}", theo.u2_v);
        assert!(theo.i2_a > 90_000.0 && theo.i2_a < 99_000.0, "I2 = {}", theo.i2_a);
    }

    #[test]
    fn test_proportioning_chain() {
        let coeffs = SmeltingProduct::SiliconManganese.coefficients();
        let theo = theoretical(&test_inputs(), &coeffs);

        assert!((theo.dc_mm - coeffs.ky * theo.de_mm).abs() < 1e-9);
        assert!((theo.di_mm - coeffs.ki * theo.de_mm).abs() < 1e-9);
        assert!((theo.hh_mm - coeffs.kh * theo.de_mm).abs() < 1e-9);
        assert_eq!(theo.shell_id_mm, theo.di_mm + 2400.0);
        assert_eq!(theo.shell_h_mm, theo.hh_mm + 2000.0);
    }

    #[test]
    fn test_primary_current() {
        // I1 = 33e6 / (√3 · 35000) ≈ 544 A
        let theo = theoretical(&test_inputs(), &SmeltingProduct::SiliconManganese.coefficients());
        assert!((theo.i1_a - 544.3).abs() < 1.0, "I1 = {}", theo.i1_a);
    }

    #[test]
    fn test_pure_function_idempotent() {
        let inputs = test_inputs();
        let coeffs = SmeltingProduct::Ferrosilicon75.coefficients();
        let a = theoretical(&inputs, &coeffs);
        let b = theoretical(&inputs, &coeffs);
        assert_eq!(a, b);
    }

    #[test]
    fn test_higher_current_density_shrinks_electrode() {
        let inputs = test_inputs();
        let loose = theoretical(&inputs, &CoefficientSet::default().with_j(4.0));
        let tight = theoretical(&inputs, &CoefficientSet::default().with_j(7.0));
        assert!(tight.de_mm < loose.de_mm);
    }

    #[test]
    fn test_validate_rejects_nonpositive_inputs() {
        let mut inputs = test_inputs();
        inputs.lining_mm = 0.0;
        assert!(inputs.validate().is_err());
        assert!(test_inputs().validate().is_ok());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let theo = theoretical(&test_inputs(), &SmeltingProduct::CalciumCarbide.coefficients());
        let json = serde_json::to_string_pretty(&theo).unwrap();
        let roundtrip: TheoreticalParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(theo, roundtrip);
    }
}
