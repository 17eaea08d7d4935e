//! # Bolt Strength Check
//!
//! Static strength check for an axially loaded metric bolt: tensile
//! stress over the thread stress area against the property-grade yield
//! strength. When the preload is torque-controlled, the working load is
//! grown by the customary 1.3 factor for the residual preload.
//!
//! The verdict bands follow shop practice: a safety factor below 1.5 is
//! rejected, above 5 the fastener is flagged as oversized.
//!
//! ## Example
//!
//! ```rust
//! use smelt_core::calculations::bolt::{calculate, BoltGrade, BoltInput, BoltVerdict};
//!
//! let input = BoltInput {
//!     label: "Shell flange".to_string(),
//!     axial_load_n: 5000.0,
//!     nominal_mm: 10.0,
//!     grade: BoltGrade::Grade4_8,
//!     controlled_preload: true,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.verdict, BoltVerdict::Pass);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::materials::{thread_spec, ThreadSpec};

/// Residual-preload factor on the working load
const PRELOAD_FACTOR: f64 = 1.3;

/// Safety factor below which the joint is rejected
const MIN_SAFETY: f64 = 1.5;

/// Safety factor above which the fastener is flagged as oversized
const MAX_SAFETY: f64 = 5.0;

/// Metric bolt property grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoltGrade {
    /// Grade 4.8
    #[serde(rename = "4.8")]
    Grade4_8,
    /// Grade 8.8
    #[serde(rename = "8.8")]
    Grade8_8,
    /// Grade 10.9
    #[serde(rename = "10.9")]
    Grade10_9,
    /// Grade 12.9
    #[serde(rename = "12.9")]
    Grade12_9,
}

impl BoltGrade {
    /// All grades for UI selection
    pub const ALL: [BoltGrade; 4] = [
        BoltGrade::Grade4_8,
        BoltGrade::Grade8_8,
        BoltGrade::Grade10_9,
        BoltGrade::Grade12_9,
    ];

    /// Grade designation string (e.g., "8.8")
    pub fn code(&self) -> &'static str {
        match self {
            BoltGrade::Grade4_8 => "4.8",
            BoltGrade::Grade8_8 => "8.8",
            BoltGrade::Grade10_9 => "10.9",
            BoltGrade::Grade12_9 => "12.9",
        }
    }

    /// Ultimate tensile strength σb (MPa): first grade digit(s) × 100
    pub fn tensile_mpa(&self) -> f64 {
        match self {
            BoltGrade::Grade4_8 => 400.0,
            BoltGrade::Grade8_8 => 800.0,
            BoltGrade::Grade10_9 => 1000.0,
            BoltGrade::Grade12_9 => 1200.0,
        }
    }

    /// Yield strength σs (MPa): σb × the decimal digit as a ratio
    pub fn yield_mpa(&self) -> f64 {
        match self {
            BoltGrade::Grade4_8 => 320.0,
            BoltGrade::Grade8_8 => 640.0,
            BoltGrade::Grade10_9 => 900.0,
            BoltGrade::Grade12_9 => 1080.0,
        }
    }

    /// Parse a designation like "8.8"
    pub fn from_str_flexible(s: &str) -> DesignResult<Self> {
        match s.trim() {
            "4.8" => Ok(BoltGrade::Grade4_8),
            "8.8" => Ok(BoltGrade::Grade8_8),
            "10.9" => Ok(BoltGrade::Grade10_9),
            "12.9" => Ok(BoltGrade::Grade12_9),
            _ => Err(DesignError::material_not_found(s)),
        }
    }
}

impl std::fmt::Display for BoltGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Outcome of the strength check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoltVerdict {
    /// Safety factor in the acceptable band
    Pass,
    /// Safety factor below the minimum - strength insufficient
    Understrength,
    /// Safety factor above the maximum - consider a smaller size
    Oversized,
}

/// Input parameters for a bolt strength check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Shell flange",
///   "axial_load_n": 5000.0,
///   "nominal_mm": 10.0,
///   "grade": "8.8",
///   "controlled_preload": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoltInput {
    /// User label for this joint
    pub label: String,

    /// Axial working load F (N)
    pub axial_load_n: f64,

    /// Nominal thread diameter (mm), must be a standard metric size
    pub nominal_mm: f64,

    /// Property grade
    pub grade: BoltGrade,

    /// Whether the preload is torque-controlled (applies the 1.3 factor)
    pub controlled_preload: bool,
}

impl BoltInput {
    /// Validate input parameters.
    pub fn validate(&self) -> DesignResult<()> {
        if self.axial_load_n <= 0.0 {
            return Err(DesignError::invalid_input(
                "axial_load_n",
                self.axial_load_n.to_string(),
                "Axial load must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a bolt strength check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoltResult {
    /// Thread dimensions used
    pub thread: ThreadSpec,
    /// Yield strength of the grade (MPa)
    pub yield_mpa: f64,
    /// Effective load after the preload factor (N)
    pub effective_load_n: f64,
    /// Tensile stress over the stress area (MPa)
    pub stress_mpa: f64,
    /// Safety factor σs / σ
    pub safety_factor: f64,
    /// Verdict per the 1.5 / 5.0 bands
    pub verdict: BoltVerdict,
}

/// Check a bolt against its property-grade yield strength.
///
/// # Arguments
///
/// * `input` - Joint parameters (load, size, grade, preload control)
///
/// # Returns
///
/// * `Ok(BoltResult)` - Stress, safety factor and verdict
/// * `Err(DesignError)` - Invalid input or non-standard thread size
pub fn calculate(input: &BoltInput) -> DesignResult<BoltResult> {
    input.validate()?;

    let thread = *thread_spec(input.nominal_mm)?;
    let yield_mpa = input.grade.yield_mpa();

    let effective_load_n = if input.controlled_preload {
        input.axial_load_n * PRELOAD_FACTOR
    } else {
        input.axial_load_n
    };
    let stress_mpa = effective_load_n / thread.stress_area_mm2;
    let safety_factor = yield_mpa / stress_mpa;

    let verdict = if safety_factor < MIN_SAFETY {
        BoltVerdict::Understrength
    } else if safety_factor > MAX_SAFETY {
        BoltVerdict::Oversized
    } else {
        BoltVerdict::Pass
    };

    Ok(BoltResult {
        thread,
        yield_mpa,
        effective_load_n,
        stress_mpa,
        safety_factor,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_bolt() -> BoltInput {
        BoltInput {
            label: "Test Joint".to_string(),
            axial_load_n: 5000.0,
            nominal_mm: 10.0,
            grade: BoltGrade::Grade4_8,
            controlled_preload: true,
        }
    }

    #[test]
    fn test_grade_strengths() {
        assert_eq!(BoltGrade::Grade4_8.yield_mpa(), 320.0);
        assert_eq!(BoltGrade::Grade8_8.yield_mpa(), 640.0);
        assert_eq!(BoltGrade::Grade12_9.tensile_mpa(), 1200.0);
    }

    #[test]
    fn test_m10_grade48_passes() {
        // F'' = 1.3·5000 = 6500 N over As = 58 mm² → 112.1 MPa,
        // S = 320/112.1 ≈ 2.86
        let result = calculate(&test_bolt()).unwrap();

        assert_eq!(result.effective_load_n, 6500.0);
        assert!((result.stress_mpa - 112.07).abs() < 0.1);
        assert!((result.safety_factor - 2.86).abs() < 0.05);
        assert_eq!(result.verdict, BoltVerdict::Pass);
    }

    #[test]
    fn test_high_grade_flags_oversized() {
        let mut input = test_bolt();
        input.grade = BoltGrade::Grade8_8;
        let result = calculate(&input).unwrap();
        // S = 640/112.1 ≈ 5.7 → over the 5.0 band
        assert_eq!(result.verdict, BoltVerdict::Oversized);
    }

    #[test]
    fn test_overload_flags_understrength() {
        let input = BoltInput {
            label: "Overloaded".to_string(),
            axial_load_n: 20_000.0,
            nominal_mm: 6.0,
            grade: BoltGrade::Grade4_8,
            controlled_preload: true,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.verdict, BoltVerdict::Understrength);
    }

    #[test]
    fn test_uncontrolled_preload_skips_factor() {
        let mut input = test_bolt();
        input.controlled_preload = false;
        let result = calculate(&input).unwrap();
        assert_eq!(result.effective_load_n, 5000.0);
    }

    #[test]
    fn test_nonstandard_size_rejected() {
        let mut input = test_bolt();
        input.nominal_mm = 13.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "THREAD_NOT_FOUND");
    }

    #[test]
    fn test_grade_parse() {
        assert_eq!(BoltGrade::from_str_flexible("10.9").unwrap(), BoltGrade::Grade10_9);
        assert!(BoltGrade::from_str_flexible("6.6").is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = calculate(&test_bolt()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: BoltResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.verdict, roundtrip.verdict);
    }
}
