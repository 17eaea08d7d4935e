//! # Gear Pair Sizing
//!
//! Sizes a spur or helical gear pair from surface contact strength,
//! back-solving the minimum pinion pitch diameter and then snapping the
//! module to the standard series:
//!
//! `d1 ≥ ( (2·K·T1·(u+1)/u) · (Ze·Zh/σH)² · (1/φd) )^(1/3)`
//!
//! A forward contact-stress check from a chosen center distance is also
//! provided for verifying an existing pair.
//!
//! ## Assumptions
//!
//! - Steel pinion on steel wheel (Ze = 189.8 √MPa)
//! - Light dynamic loading (K = 1.2)
//! - Width factor φd = b/d1 = 1.0
//! - Pinion tooth count fixed at the customary trial value z1 = 20

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Dynamic load factor K
const K_DYNAMIC: f64 = 1.2;

/// Elasticity factor Ze for steel on steel (√MPa)
const Z_ELASTIC: f64 = 189.8;

/// Zone factor Zh at the pitch point
const Z_ZONE: f64 = 2.5;

/// Width factor φd = b/d1
const WIDTH_FACTOR: f64 = 1.0;

/// Trial pinion tooth count z1
const PINION_TEETH: u32 = 20;

/// Standard module series (mm)
const STANDARD_MODULES: [f64; 9] = [1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0];

/// Tooth surface hardness class, setting the allowable contact stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToothHardness {
    /// Through-hardened, HBS < 350
    SoftFaced,
    /// Surface-hardened, HRC > 55
    HardFaced,
}

impl ToothHardness {
    /// Allowable contact stress σH (MPa)
    pub fn sigma_h_limit_mpa(&self) -> f64 {
        match self {
            ToothHardness::SoftFaced => 600.0,
            ToothHardness::HardFaced => 1100.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ToothHardness::SoftFaced => "Soft-faced (HBS < 350)",
            ToothHardness::HardFaced => "Hard-faced (HRC > 55)",
        }
    }
}

/// Input parameters for a gear pair sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Tilt drive",
///   "pinion_torque_nm": 500.0,
///   "ratio": 3.5,
///   "helix_deg": 0.0,
///   "hardness": "SoftFaced"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearInput {
    /// User label for this gear pair
    pub label: String,

    /// Pinion torque T1 (N·m)
    pub pinion_torque_nm: f64,

    /// Transmission ratio u = z2/z1
    pub ratio: f64,

    /// Helix angle β (degrees); 0 for spur gears
    pub helix_deg: f64,

    /// Tooth surface hardness class
    pub hardness: ToothHardness,
}

impl GearInput {
    /// Validate input parameters.
    pub fn validate(&self) -> DesignResult<()> {
        if self.pinion_torque_nm <= 0.0 {
            return Err(DesignError::invalid_input(
                "pinion_torque_nm",
                self.pinion_torque_nm.to_string(),
                "Torque must be positive",
            ));
        }
        if self.ratio <= 0.0 {
            return Err(DesignError::invalid_input(
                "ratio",
                self.ratio.to_string(),
                "Ratio must be positive",
            ));
        }
        if self.helix_deg < 0.0 || self.helix_deg > 30.0 {
            return Err(DesignError::invalid_input(
                "helix_deg",
                self.helix_deg.to_string(),
                "Helix angle must be in [0, 30]",
            ));
        }
        Ok(())
    }
}

/// Results from a gear pair sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearResult {
    /// Minimum pinion pitch diameter from contact strength (mm)
    pub d1_min_mm: f64,
    /// Selected standard module (mm)
    pub module_mm: f64,
    /// Suggested center distance (mm)
    pub center_distance_mm: f64,
    /// Pinion tooth count z1
    pub pinion_teeth: u32,
    /// Wheel tooth count z2
    pub wheel_teeth: u32,
    /// Face width b = φd·d1 (mm)
    pub face_width_mm: f64,
    /// Allowable contact stress used (MPa)
    pub sigma_h_limit_mpa: f64,
}

/// Contact stress for an existing pair from its center distance (MPa).
///
/// Back-solves the pinion diameter as `d1 = 2a/(u+1)`. Degenerate
/// geometry (non-positive d1 or face width) evaluates to zero stress.
pub fn contact_stress(
    pinion_torque_nm: f64,
    ratio: f64,
    center_distance_mm: f64,
    face_width_mm: f64,
) -> f64 {
    let d1 = 2.0 * center_distance_mm / (ratio + 1.0);
    if d1 <= 0.0 || face_width_mm <= 0.0 {
        return 0.0;
    }
    let torque_nmm = pinion_torque_nm * 1000.0;
    Z_ELASTIC
        * (2.0 * K_DYNAMIC * torque_nmm * (ratio + 1.0) / (face_width_mm * d1 * d1 * ratio))
            .sqrt()
}

/// Size the gear pair from contact strength.
///
/// # Arguments
///
/// * `input` - Gear parameters (torque, ratio, helix, hardness)
///
/// # Returns
///
/// * `Ok(GearResult)` - Sizing with the selected standard module
/// * `Err(DesignError)` - Structured error if inputs are invalid
pub fn calculate(input: &GearInput) -> DesignResult<GearResult> {
    input.validate()?;

    let sigma_h = input.hardness.sigma_h_limit_mpa();
    let torque_nmm = input.pinion_torque_nm * 1000.0;

    let strength_factor = (Z_ELASTIC * Z_ZONE / sigma_h).powi(2);
    let d1_min_mm = (2.0 * K_DYNAMIC * torque_nmm * (input.ratio + 1.0) / input.ratio
        * strength_factor
        * (1.0 / WIDTH_FACTOR))
        .powf(1.0 / 3.0);

    let module_calc = d1_min_mm / PINION_TEETH as f64;
    // Smallest standard module that carries the computed one; the series
    // saturates at 10 mm
    let module_mm = STANDARD_MODULES
        .iter()
        .copied()
        .find(|&m| m >= module_calc)
        .unwrap_or(STANDARD_MODULES[STANDARD_MODULES.len() - 1]);

    let center_distance_mm = module_mm * PINION_TEETH as f64 * (1.0 + input.ratio)
        / (2.0 * input.helix_deg.to_radians().cos());

    Ok(GearResult {
        d1_min_mm,
        module_mm,
        center_distance_mm,
        pinion_teeth: PINION_TEETH,
        wheel_teeth: (PINION_TEETH as f64 * input.ratio) as u32,
        face_width_mm: d1_min_mm * WIDTH_FACTOR,
        sigma_h_limit_mpa: sigma_h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_gear() -> GearInput {
        GearInput {
            label: "Test Pair".to_string(),
            pinion_torque_nm: 500.0,
            ratio: 3.5,
            helix_deg: 0.0,
            hardness: ToothHardness::SoftFaced,
        }
    }

    #[test]
    fn test_soft_faced_sizing() {
        // (2·1.2·5e5·4.5/3.5)·(189.8·2.5/600)² ≈ 964 900 → d1 ≈ 98.8 mm
        let result = calculate(&test_gear()).unwrap();

        assert!((result.d1_min_mm - 98.8).abs() < 0.5, "d1 = {}", result.d1_min_mm);
        assert_eq!(result.module_mm, 5.0); // 98.8/20 = 4.94 → 5
        // a = 5·20·4.5/2 = 225 for spur teeth
        assert!((result.center_distance_mm - 225.0).abs() < 1e-9);
        assert_eq!(result.wheel_teeth, 70);
    }

    #[test]
    fn test_hard_facing_shrinks_pinion() {
        let mut hard = test_gear();
        hard.hardness = ToothHardness::HardFaced;

        let soft_result = calculate(&test_gear()).unwrap();
        let hard_result = calculate(&hard).unwrap();
        assert!(hard_result.d1_min_mm < soft_result.d1_min_mm);
    }

    #[test]
    fn test_helix_widens_center_distance() {
        let mut helical = test_gear();
        helical.helix_deg = 15.0;

        let spur = calculate(&test_gear()).unwrap();
        let helix = calculate(&helical).unwrap();
        // Same normal module, a grows by 1/cos β
        assert!(helix.center_distance_mm > spur.center_distance_mm);
    }

    #[test]
    fn test_module_series_saturates() {
        let mut huge = test_gear();
        huge.pinion_torque_nm = 500_000.0;
        let result = calculate(&huge).unwrap();
        assert_eq!(result.module_mm, 10.0);
    }

    #[test]
    fn test_forward_contact_stress() {
        // a = 225, u = 3.5 → d1 = 100; b = 98.8:
        // σH = 189.8·√(2·1.2·5e5·4.5/(98.8·100²·3.5)) ≈ 237 MPa
        let sigma = contact_stress(500.0, 3.5, 225.0, 98.8);
        assert!((sigma - 237.2).abs() < 1.0, "σH = {}", sigma);
    }

    #[test]
    fn test_degenerate_geometry_zero_stress() {
        assert_eq!(contact_stress(500.0, 3.5, 0.0, 98.8), 0.0);
        assert_eq!(contact_stress(500.0, 3.5, 225.0, 0.0), 0.0);
    }

    #[test]
    fn test_invalid_ratio() {
        let mut input = test_gear();
        input.ratio = -1.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = calculate(&test_gear()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: GearResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.module_mm, roundtrip.module_mm);
    }
}
