//! # Shaft Diameter Estimate
//!
//! Torsion-only minimum diameter for a transmission shaft,
//! `d = A0 · (P/n)^(1/3)`, with the material factor A0 from the shaft
//! steel table. The keyway weakens the section, so the estimate is grown
//! 5% and then snapped UP to the next 5 mm; the snap is a ceiling, never
//! nearest-multiple, so the design diameter stays at or above the
//! strength estimate.
//!
//! A flat key (width × height) and keyseat depth are recommended from the
//! standard step table for the final diameter.
//!
//! ## Example
//!
//! ```rust
//! use smelt_core::calculations::shaft::{calculate, ShaftInput};
//! use smelt_core::materials::ShaftMaterial;
//!
//! let input = ShaftInput {
//!     label: "Drive shaft".to_string(),
//!     power_kw: 15.0,
//!     speed_rpm: 960.0,
//!     material: ShaftMaterial::Steel45,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.d_final_mm, 35.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::materials::ShaftMaterial;

/// Keyway section-loss allowance on the torsion estimate
const KEYWAY_ALLOWANCE: f64 = 1.05;

/// Shaft diameter snap increment (mm)
const DIAMETER_STEP_MM: f64 = 5.0;

/// Flat key step table: (max shaft diameter, key width b, key height h),
/// all mm
const KEY_TABLE: [(f64, f64, f64); 11] = [
    (12.0, 4.0, 4.0),
    (17.0, 5.0, 5.0),
    (22.0, 6.0, 6.0),
    (30.0, 8.0, 7.0),
    (38.0, 10.0, 8.0),
    (44.0, 12.0, 8.0),
    (50.0, 14.0, 9.0),
    (58.0, 16.0, 10.0),
    (65.0, 18.0, 11.0),
    (75.0, 20.0, 12.0),
    (85.0, 22.0, 14.0),
];

/// Recommend a flat key (width, height) in mm for a shaft diameter.
///
/// Shafts beyond the table get the largest listed key.
pub fn recommend_key(d_mm: f64) -> (f64, f64) {
    for (d_max, b, h) in KEY_TABLE {
        if d_mm <= d_max {
            return (b, h);
        }
    }
    (25.0, 14.0)
}

/// Input parameters for a shaft diameter estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Drive shaft",
///   "power_kw": 15.0,
///   "speed_rpm": 960.0,
///   "material": "45"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaftInput {
    /// User label for this shaft (e.g., "Drive shaft", "Tilt axle")
    pub label: String,

    /// Transmitted power P (kW)
    pub power_kw: f64,

    /// Rotational speed n (r/min)
    pub speed_rpm: f64,

    /// Shaft steel grade
    pub material: ShaftMaterial,
}

impl ShaftInput {
    /// Validate input parameters.
    pub fn validate(&self) -> DesignResult<()> {
        if self.power_kw <= 0.0 {
            return Err(DesignError::invalid_input(
                "power_kw",
                self.power_kw.to_string(),
                "Power must be positive",
            ));
        }
        if self.speed_rpm <= 0.0 {
            return Err(DesignError::invalid_input(
                "speed_rpm",
                self.speed_rpm.to_string(),
                "Speed must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a shaft diameter estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaftResult {
    /// Transmitted torque T = 9550·P/n (N·m)
    pub torque_nm: f64,
    /// Minimum diameter from pure torsion (mm)
    pub d_min_mm: f64,
    /// Diameter grown by the keyway allowance (mm)
    pub d_keyed_mm: f64,
    /// Recommended design diameter, snapped up to 5 mm (mm)
    pub d_final_mm: f64,
    /// Recommended key width b (mm)
    pub key_width_mm: f64,
    /// Recommended key height h (mm)
    pub key_height_mm: f64,
    /// Keyseat depth in the shaft t1 (mm)
    pub keyseat_depth_mm: f64,
    /// Sizing factor used (from the material table)
    pub a0: f64,
}

/// Estimate the shaft diameter and recommend a key.
///
/// # Arguments
///
/// * `input` - Shaft parameters (power, speed, material)
///
/// # Returns
///
/// * `Ok(ShaftResult)` - Diameter chain and key recommendation
/// * `Err(DesignError)` - Structured error if inputs are invalid
pub fn calculate(input: &ShaftInput) -> DesignResult<ShaftResult> {
    input.validate()?;

    let a0 = input.material.properties().a0;

    let torque_nm = 9550.0 * input.power_kw / input.speed_rpm;
    let d_min_mm = a0 * (input.power_kw / input.speed_rpm).powf(1.0 / 3.0);
    let d_keyed_mm = d_min_mm * KEYWAY_ALLOWANCE;
    let d_final_mm = (d_keyed_mm / DIAMETER_STEP_MM).ceil() * DIAMETER_STEP_MM;

    let (key_width_mm, key_height_mm) = recommend_key(d_final_mm);
    let keyseat_depth_mm = if key_height_mm > 6.0 {
        key_height_mm / 2.0 + 0.2
    } else {
        key_height_mm / 2.0 + 0.1
    };

    Ok(ShaftResult {
        torque_nm,
        d_min_mm,
        d_keyed_mm,
        d_final_mm,
        key_width_mm,
        key_height_mm,
        keyseat_depth_mm,
        a0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_shaft() -> ShaftInput {
        ShaftInput {
            label: "Test Shaft".to_string(),
            power_kw: 15.0,
            speed_rpm: 960.0,
            material: ShaftMaterial::Steel45,
        }
    }

    #[test]
    fn test_15kw_960rpm_chain() {
        // P/n = 0.015625, cube root exactly 0.25, A0 = 118:
        // d_min = 29.5, +5% = 30.975, snap up → 35
        let result = calculate(&test_shaft()).unwrap();

        assert!((result.d_min_mm - 29.5).abs() < 1e-9);
        assert_eq!(result.d_final_mm, 35.0);
        // T = 9550·15/960 ≈ 149.2 N·m
        assert!((result.torque_nm - 149.2).abs() < 0.1);
    }

    #[test]
    fn test_key_recommendation() {
        let result = calculate(&test_shaft()).unwrap();
        // 35 mm shaft → 10×8 key, t1 = 4.2
        assert_eq!(result.key_width_mm, 10.0);
        assert_eq!(result.key_height_mm, 8.0);
        assert!((result.keyseat_depth_mm - 4.2).abs() < 1e-9);
    }

    #[test]
    fn test_key_table_steps() {
        assert_eq!(recommend_key(12.0), (4.0, 4.0));
        assert_eq!(recommend_key(12.5), (5.0, 5.0));
        assert_eq!(recommend_key(50.0), (14.0, 9.0));
        assert_eq!(recommend_key(120.0), (25.0, 14.0));
    }

    #[test]
    fn test_small_key_seat_rule() {
        // h ≤ 6 uses the +0.1 rule
        let input = ShaftInput {
            label: "Small".to_string(),
            power_kw: 0.25,
            speed_rpm: 1440.0,
            material: ShaftMaterial::Steel45,
        };
        let result = calculate(&input).unwrap();
        assert!(result.key_height_mm <= 6.0);
        assert!(
            (result.keyseat_depth_mm - (result.key_height_mm / 2.0 + 0.1)).abs() < 1e-9
        );
    }

    #[test]
    fn test_stronger_steel_smaller_shaft() {
        let mut strong = test_shaft();
        strong.material = ShaftMaterial::Steel20CrMnTi;
        let weak = calculate(&test_shaft()).unwrap();
        let hard = calculate(&strong).unwrap();
        assert!(hard.d_min_mm < weak.d_min_mm);
    }

    #[test]
    fn test_invalid_speed() {
        let mut input = test_shaft();
        input.speed_rpm = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = calculate(&test_shaft()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: ShaftResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.d_final_mm, roundtrip.d_final_mm);
    }
}
