//! Metric Coarse Thread Dimensions
//!
//! Basic dimensions for ISO metric coarse threads M6 through M48: pitch,
//! pitch diameter, and the tensile stress area used for bolt strength
//! checks.

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Basic dimensions for one metric coarse thread size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreadSpec {
    /// Nominal (major) diameter d (mm)
    pub nominal_mm: f64,
    /// Thread pitch P (mm)
    pub pitch_mm: f64,
    /// Pitch diameter d2 (mm)
    pub pitch_diameter_mm: f64,
    /// Tensile stress area As (mm²)
    pub stress_area_mm2: f64,
}

/// Metric coarse thread table, M6..M48
pub const METRIC_COARSE_THREADS: [ThreadSpec; 11] = [
    ThreadSpec { nominal_mm: 6.0, pitch_mm: 1.0, pitch_diameter_mm: 5.350, stress_area_mm2: 20.1 },
    ThreadSpec { nominal_mm: 8.0, pitch_mm: 1.25, pitch_diameter_mm: 7.188, stress_area_mm2: 36.6 },
    ThreadSpec { nominal_mm: 10.0, pitch_mm: 1.5, pitch_diameter_mm: 9.026, stress_area_mm2: 58.0 },
    ThreadSpec { nominal_mm: 12.0, pitch_mm: 1.75, pitch_diameter_mm: 10.863, stress_area_mm2: 84.3 },
    ThreadSpec { nominal_mm: 16.0, pitch_mm: 2.0, pitch_diameter_mm: 14.701, stress_area_mm2: 157.0 },
    ThreadSpec { nominal_mm: 20.0, pitch_mm: 2.5, pitch_diameter_mm: 18.376, stress_area_mm2: 245.0 },
    ThreadSpec { nominal_mm: 24.0, pitch_mm: 3.0, pitch_diameter_mm: 22.051, stress_area_mm2: 353.0 },
    ThreadSpec { nominal_mm: 30.0, pitch_mm: 3.5, pitch_diameter_mm: 27.727, stress_area_mm2: 561.0 },
    ThreadSpec { nominal_mm: 36.0, pitch_mm: 4.0, pitch_diameter_mm: 33.402, stress_area_mm2: 817.0 },
    ThreadSpec { nominal_mm: 42.0, pitch_mm: 4.5, pitch_diameter_mm: 39.077, stress_area_mm2: 1120.0 },
    ThreadSpec { nominal_mm: 48.0, pitch_mm: 5.0, pitch_diameter_mm: 44.752, stress_area_mm2: 1470.0 },
];

/// Look up a thread by nominal diameter (exact match).
pub fn thread_spec(nominal_mm: f64) -> DesignResult<&'static ThreadSpec> {
    METRIC_COARSE_THREADS
        .iter()
        .find(|t| t.nominal_mm == nominal_mm)
        .ok_or(DesignError::ThreadNotFound { nominal_mm })
}

/// Nominal diameters available in the table, ascending.
pub fn nominal_sizes() -> Vec<f64> {
    METRIC_COARSE_THREADS.iter().map(|t| t.nominal_mm).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_m12() {
        let m12 = thread_spec(12.0).unwrap();
        assert_eq!(m12.pitch_mm, 1.75);
        assert_eq!(m12.stress_area_mm2, 84.3);
    }

    #[test]
    fn test_lookup_missing_size() {
        let err = thread_spec(13.0).unwrap_err();
        assert_eq!(err.error_code(), "THREAD_NOT_FOUND");
    }

    #[test]
    fn test_table_is_ascending() {
        for pair in METRIC_COARSE_THREADS.windows(2) {
            assert!(pair[0].nominal_mm < pair[1].nominal_mm);
            assert!(pair[0].stress_area_mm2 < pair[1].stress_area_mm2);
        }
    }

    #[test]
    fn test_nominal_sizes() {
        let sizes = nominal_sizes();
        assert_eq!(sizes.first(), Some(&6.0));
        assert_eq!(sizes.last(), Some(&48.0));
    }
}
