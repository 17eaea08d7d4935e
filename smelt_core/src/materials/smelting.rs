//! Smelting-Product Coefficient Presets
//!
//! Empirical design coefficients for submerged-arc furnace sizing, keyed by
//! the product being smelted. The five factors scale everything off the
//! transformer capacity and the electrode diameter:
//!
//! - `Ke` - secondary voltage factor, `U2 = Ke · P^(1/3)`
//! - `J`  - electrode current density (A/cm²)
//! - `Ky` - pole-circle diameter factor, `Dc = Ky · De`
//! - `Ki` - hearth inner diameter factor, `Di = Ki · De`
//! - `Kh` - hearth depth factor, `Hh = Kh · De`
//!
//! Preset values follow the ferroalloy design handbook ranges. A host may
//! override individual factors (expert mode) without changing the preset
//! identity; overrides apply to the returned copy only.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Smelting products with furnace coefficient presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmeltingProduct {
    /// Silicomanganese
    #[serde(rename = "SiMn")]
    SiliconManganese,
    /// High-carbon ferrochrome
    #[serde(rename = "FeCr")]
    HighCarbonFerrochrome,
    /// Ferronickel (RKEF line)
    #[serde(rename = "FeNi-RKEF")]
    FerronickelRkef,
    /// Ferrosilicon 75
    #[serde(rename = "FeSi75")]
    Ferrosilicon75,
    /// Calcium carbide
    #[serde(rename = "CaC2")]
    CalciumCarbide,
    /// Industrial silicon
    #[serde(rename = "Si")]
    IndustrialSilicon,
    /// User-defined starting point
    Custom,
}

impl SmeltingProduct {
    /// All products for UI selection, in display order
    pub const ALL: [SmeltingProduct; 7] = [
        SmeltingProduct::SiliconManganese,
        SmeltingProduct::HighCarbonFerrochrome,
        SmeltingProduct::FerronickelRkef,
        SmeltingProduct::Ferrosilicon75,
        SmeltingProduct::CalciumCarbide,
        SmeltingProduct::IndustrialSilicon,
        SmeltingProduct::Custom,
    ];

    /// Get the short code string (e.g., "SiMn", "FeCr")
    pub fn code(&self) -> &'static str {
        match self {
            SmeltingProduct::SiliconManganese => "SiMn",
            SmeltingProduct::HighCarbonFerrochrome => "FeCr",
            SmeltingProduct::FerronickelRkef => "FeNi-RKEF",
            SmeltingProduct::Ferrosilicon75 => "FeSi75",
            SmeltingProduct::CalciumCarbide => "CaC2",
            SmeltingProduct::IndustrialSilicon => "Si",
            SmeltingProduct::Custom => "Custom",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SmeltingProduct::SiliconManganese => "Silicomanganese (SiMn)",
            SmeltingProduct::HighCarbonFerrochrome => "High-Carbon Ferrochrome (FeCr)",
            SmeltingProduct::FerronickelRkef => "Ferronickel (FeNi-RKEF)",
            SmeltingProduct::Ferrosilicon75 => "Ferrosilicon 75 (FeSi75)",
            SmeltingProduct::CalciumCarbide => "Calcium Carbide (CaC2)",
            SmeltingProduct::IndustrialSilicon => "Industrial Silicon (Si)",
            SmeltingProduct::Custom => "Custom",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> DesignResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "SIMN" | "SILICOMANGANESE" => Ok(SmeltingProduct::SiliconManganese),
            "FECR" | "FERROCHROME" | "HC-FECR" => Ok(SmeltingProduct::HighCarbonFerrochrome),
            "FENI" | "FENI-RKEF" | "FERRONICKEL" | "RKEF" => Ok(SmeltingProduct::FerronickelRkef),
            "FESI75" | "FESI" | "FERROSILICON" => Ok(SmeltingProduct::Ferrosilicon75),
            "CAC2" | "CARBIDE" | "CALCIUM-CARBIDE" => Ok(SmeltingProduct::CalciumCarbide),
            "SI" | "SILICON" | "INDUSTRIAL-SILICON" => Ok(SmeltingProduct::IndustrialSilicon),
            "CUSTOM" => Ok(SmeltingProduct::Custom),
            _ => Err(DesignError::preset_not_found(s)),
        }
    }

    /// Get the coefficient preset for this product.
    ///
    /// Returns a copy; field-level overrides via the `with_*` builders do
    /// not affect the preset.
    pub fn coefficients(&self) -> CoefficientSet {
        match self {
            SmeltingProduct::SiliconManganese => CoefficientSet {
                ke: 6.3,
                j: 5.5,
                ky: 2.7,
                ki: 6.4,
                kh: 2.5,
                melt_density_t_m3: Some(6.1),
            },
            SmeltingProduct::HighCarbonFerrochrome => CoefficientSet {
                ke: 6.8,
                j: 5.7,
                ky: 2.65,
                ki: 6.3,
                kh: 2.6,
                melt_density_t_m3: Some(6.9),
            },
            SmeltingProduct::FerronickelRkef => CoefficientSet {
                ke: 12.0,
                j: 4.0,
                ky: 3.6,
                ki: 10.0,
                kh: 2.9,
                melt_density_t_m3: Some(8.1),
            },
            SmeltingProduct::Ferrosilicon75 => CoefficientSet {
                ke: 6.8,
                j: 6.5,
                ky: 2.25,
                ki: 5.8,
                kh: 2.2,
                melt_density_t_m3: Some(3.5),
            },
            SmeltingProduct::CalciumCarbide => CoefficientSet {
                ke: 6.5,
                j: 7.0,
                ky: 2.7,
                ki: 6.4,
                kh: 2.2,
                melt_density_t_m3: Some(2.2),
            },
            SmeltingProduct::IndustrialSilicon => CoefficientSet {
                ke: 7.5,
                j: 6.0,
                ky: 2.4,
                ki: 6.0,
                kh: 2.3,
                melt_density_t_m3: Some(2.5),
            },
            SmeltingProduct::Custom => CoefficientSet {
                ke: 6.5,
                j: 5.5,
                ky: 2.7,
                ki: 6.5,
                kh: 2.5,
                melt_density_t_m3: None,
            },
        }
    }
}

impl std::fmt::Display for SmeltingProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Empirical furnace design coefficients.
///
/// All five factors must be strictly positive; `validate` enforces this at
/// the boundary before the set reaches any calculation.
///
/// ## JSON Example
///
/// ```json
/// { "ke": 6.3, "j": 5.5, "ky": 2.7, "ki": 6.4, "kh": 2.5,
///   "melt_density_t_m3": 6.1 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    /// Secondary voltage factor Ke
    pub ke: f64,
    /// Electrode current density J (A/cm²)
    pub j: f64,
    /// Pole-circle diameter factor Ky
    pub ky: f64,
    /// Hearth inner diameter factor Ki
    pub ki: f64,
    /// Hearth depth factor Kh
    pub kh: f64,
    /// Typical tapping density of the melt (t/m³), used for ladle loads
    pub melt_density_t_m3: Option<f64>,
}

impl CoefficientSet {
    /// Override the voltage factor Ke
    pub fn with_ke(mut self, ke: f64) -> Self {
        self.ke = ke;
        self
    }

    /// Override the current density J
    pub fn with_j(mut self, j: f64) -> Self {
        self.j = j;
        self
    }

    /// Override the pole-circle factor Ky
    pub fn with_ky(mut self, ky: f64) -> Self {
        self.ky = ky;
        self
    }

    /// Override the hearth diameter factor Ki
    pub fn with_ki(mut self, ki: f64) -> Self {
        self.ki = ki;
        self
    }

    /// Override the hearth depth factor Kh
    pub fn with_kh(mut self, kh: f64) -> Self {
        self.kh = kh;
        self
    }

    /// Validate that every factor is strictly positive.
    pub fn validate(&self) -> DesignResult<()> {
        for (name, value) in [
            ("ke", self.ke),
            ("j", self.j),
            ("ky", self.ky),
            ("ki", self.ki),
            ("kh", self.kh),
        ] {
            if value <= 0.0 {
                return Err(DesignError::invalid_input(
                    name,
                    value.to_string(),
                    "Coefficient must be positive",
                ));
            }
        }
        Ok(())
    }
}

impl Default for CoefficientSet {
    fn default() -> Self {
        SmeltingProduct::Custom.coefficients()
    }
}

/// Name-indexed preset lookup, keyed by both code and display name.
static PRESETS_BY_NAME: Lazy<HashMap<String, SmeltingProduct>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for product in SmeltingProduct::ALL {
        map.insert(product.code().to_uppercase(), product);
        map.insert(product.display_name().to_uppercase(), product);
    }
    map
});

/// Get a coefficient preset by name (code or display name).
///
/// This is the Coefficient Provider lookup used by hosts that hold the
/// selection as a string rather than a [`SmeltingProduct`].
pub fn coefficient_set_by_name(name: &str) -> DesignResult<CoefficientSet> {
    PRESETS_BY_NAME
        .get(&name.trim().to_uppercase())
        .map(|product| product.coefficients())
        .ok_or_else(|| DesignError::preset_not_found(name))
}

/// Ordered list of preset display names for UI selection.
pub fn list_product_names() -> Vec<&'static str> {
    SmeltingProduct::ALL.iter().map(|p| p.display_name()).collect()
}
