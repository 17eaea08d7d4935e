//! Shaft Steel Properties
//!
//! Reference strength values for common shafting steels, heat treatment
//! noted per grade. `A0` is the torsion-only sizing factor used by the
//! minimum shaft diameter estimate `d = A0 · (P/n)^(1/3)`; softer steels
//! carry a larger A0.

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Shafting steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaftMaterial {
    /// 45 carbon steel, quenched and tempered
    #[serde(rename = "45")]
    Steel45,
    /// 40Cr alloy steel, quenched and tempered
    #[serde(rename = "40Cr")]
    Steel40Cr,
    /// 35SiMn alloy steel, quenched and tempered
    #[serde(rename = "35SiMn")]
    Steel35SiMn,
    /// Q235-A structural steel, as rolled
    #[serde(rename = "Q235-A")]
    Q235A,
    /// 20CrMnTi, carburized and quenched
    #[serde(rename = "20CrMnTi")]
    Steel20CrMnTi,
    /// User-defined starting point
    Custom,
}

/// Mechanical properties for a shafting steel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShaftSteelProperties {
    /// Ultimate tensile strength σb (MPa)
    pub sigma_b_mpa: f64,
    /// Yield strength σs (MPa)
    pub sigma_s_mpa: f64,
    /// Brinell hardness (HB)
    pub hardness_hb: f64,
    /// Torsion-only shaft sizing factor A0
    pub a0: f64,
    /// Modulus of elasticity E (MPa)
    pub e_mpa: f64,
}

impl ShaftMaterial {
    /// All grades for UI selection
    pub const ALL: [ShaftMaterial; 6] = [
        ShaftMaterial::Steel45,
        ShaftMaterial::Steel40Cr,
        ShaftMaterial::Steel35SiMn,
        ShaftMaterial::Q235A,
        ShaftMaterial::Steel20CrMnTi,
        ShaftMaterial::Custom,
    ];

    /// Get display name, heat treatment included
    pub fn display_name(&self) -> &'static str {
        match self {
            ShaftMaterial::Steel45 => "45 steel (Q&T)",
            ShaftMaterial::Steel40Cr => "40Cr (Q&T)",
            ShaftMaterial::Steel35SiMn => "35SiMn (Q&T)",
            ShaftMaterial::Q235A => "Q235-A",
            ShaftMaterial::Steel20CrMnTi => "20CrMnTi (carburized)",
            ShaftMaterial::Custom => "Custom material",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> DesignResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "45" | "C45" | "45-STEEL" => Ok(ShaftMaterial::Steel45),
            "40CR" => Ok(ShaftMaterial::Steel40Cr),
            "35SIMN" => Ok(ShaftMaterial::Steel35SiMn),
            "Q235" | "Q235-A" | "Q235A" => Ok(ShaftMaterial::Q235A),
            "20CRMNTI" => Ok(ShaftMaterial::Steel20CrMnTi),
            "CUSTOM" => Ok(ShaftMaterial::Custom),
            _ => Err(DesignError::material_not_found(s)),
        }
    }

    /// Get reference properties for this grade
    pub fn properties(&self) -> ShaftSteelProperties {
        match self {
            ShaftMaterial::Steel45 => ShaftSteelProperties {
                sigma_b_mpa: 600.0,
                sigma_s_mpa: 355.0,
                hardness_hb: 240.0,
                a0: 118.0,
                e_mpa: 206_000.0,
            },
            ShaftMaterial::Steel40Cr => ShaftSteelProperties {
                sigma_b_mpa: 785.0,
                sigma_s_mpa: 540.0,
                hardness_hb: 260.0,
                a0: 110.0,
                e_mpa: 211_000.0,
            },
            ShaftMaterial::Steel35SiMn => ShaftSteelProperties {
                sigma_b_mpa: 885.0,
                sigma_s_mpa: 735.0,
                hardness_hb: 270.0,
                a0: 105.0,
                e_mpa: 210_000.0,
            },
            ShaftMaterial::Q235A => ShaftSteelProperties {
                sigma_b_mpa: 370.0,
                sigma_s_mpa: 235.0,
                hardness_hb: 140.0,
                a0: 130.0,
                e_mpa: 200_000.0,
            },
            ShaftMaterial::Steel20CrMnTi => ShaftSteelProperties {
                sigma_b_mpa: 1080.0,
                sigma_s_mpa: 835.0,
                hardness_hb: 600.0,
                a0: 100.0,
                e_mpa: 212_000.0,
            },
            ShaftMaterial::Custom => ShaftSteelProperties {
                sigma_b_mpa: 500.0,
                sigma_s_mpa: 300.0,
                hardness_hb: 200.0,
                a0: 120.0,
                e_mpa: 206_000.0,
            },
        }
    }
}

impl Default for ShaftMaterial {
    fn default() -> Self {
        ShaftMaterial::Steel45
    }
}

impl std::fmt::Display for ShaftMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steel45_properties() {
        let props = ShaftMaterial::Steel45.properties();
        assert_eq!(props.sigma_b_mpa, 600.0);
        assert_eq!(props.sigma_s_mpa, 355.0);
        assert_eq!(props.a0, 118.0);
    }

    #[test]
    fn test_harder_steel_smaller_a0() {
        // A0 shrinks as allowable shear stress grows
        let q235 = ShaftMaterial::Q235A.properties();
        let crmnti = ShaftMaterial::Steel20CrMnTi.properties();
        assert!(q235.a0 > crmnti.a0);
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            ShaftMaterial::from_str_flexible("q235a").unwrap(),
            ShaftMaterial::Q235A
        );
        assert!(ShaftMaterial::from_str_flexible("60Si2Mn").is_err());
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&ShaftMaterial::Steel40Cr).unwrap();
        assert_eq!(json, "\"40Cr\"");
        let parsed: ShaftMaterial = serde_json::from_str("\"45\"").unwrap();
        assert_eq!(parsed, ShaftMaterial::Steel45);
    }
}
