//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Furnace and drivetrain design uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! Smeltcalc uses metric units internally as this matches the handbook
//! formulas and shop drawings:
//! - Length: millimetres (mm), metres (m)
//! - Electrical: volts (V), amperes (A), megavolt-amperes (MVA)
//! - Stress: megapascals (MPa)
//! - Volume: cubic metres (m³)
//! - Mass: tonnes (t)
//! - Angle: degrees (°), radians
//!
//! ## Example
//!
//! ```rust
//! use smelt_core::units::{Meters, Millimeters, Degrees, Radians};
//!
//! let lining = Millimeters(1200.0);
//! let lining_m: Meters = lining.into();
//! assert_eq!(lining_m.0, 1.2);
//!
//! let taper: Radians = Degrees(5.0).into();
//! assert!((taper.0 - 0.0872665).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Electrical Units
// ============================================================================

/// Electric potential in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Electric potential in kilovolts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilovolts(pub f64);

impl From<Kilovolts> for Volts {
    fn from(kv: Kilovolts) -> Self {
        Volts(kv.0 * 1000.0)
    }
}

impl From<Volts> for Kilovolts {
    fn from(v: Volts) -> Self {
        Kilovolts(v.0 / 1000.0)
    }
}

/// Electric current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amperes(pub f64);

/// Apparent power in kilovolt-amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloVoltAmperes(pub f64);

/// Apparent power in megavolt-amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaVoltAmperes(pub f64);

impl From<MegaVoltAmperes> for KiloVoltAmperes {
    fn from(mva: MegaVoltAmperes) -> Self {
        KiloVoltAmperes(mva.0 * 1000.0)
    }
}

impl From<KiloVoltAmperes> for MegaVoltAmperes {
    fn from(kva: KiloVoltAmperes) -> Self {
        MegaVoltAmperes(kva.0 / 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

// ============================================================================
// Volume and Mass Units
// ============================================================================

/// Volume in cubic metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Mass in tonnes (1 t = 1000 kg)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

// ============================================================================
// Angle Units
// ============================================================================

/// Plane angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Plane angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let mm = Millimeters(2500.0);
        let m: Meters = mm.into();
        assert_eq!(m.0, 2.5);

        let back: Millimeters = m.into();
        assert_eq!(back.0, 2500.0);
    }

    #[test]
    fn test_power_conversions() {
        let mva = MegaVoltAmperes(33.0);
        let kva: KiloVoltAmperes = mva.into();
        assert_eq!(kva.0, 33_000.0);
    }

    #[test]
    fn test_voltage_conversions() {
        let kv = Kilovolts(35.0);
        let v: Volts = kv.into();
        assert_eq!(v.0, 35_000.0);
    }

    #[test]
    fn test_angle_conversions() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&Millimeters(50.0)).unwrap();
        assert_eq!(json, "50.0");
        let parsed: Millimeters = serde_json::from_str("50.0").unwrap();
        assert_eq!(parsed, Millimeters(50.0));
    }
}
