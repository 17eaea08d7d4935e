//! # Error Types
//!
//! Structured error types for smelt_core. These errors carry enough
//! context to understand and fix issues programmatically; the calculation
//! formulas themselves are total over validated inputs, so errors arise at
//! the boundary (input validation and table lookups), not inside the math.
//!
//! ## Example
//!
//! ```rust
//! use smelt_core::errors::{DesignError, DesignResult};
//!
//! fn validate_capacity(capacity_mva: f64) -> DesignResult<()> {
//!     if capacity_mva <= 0.0 {
//!         return Err(DesignError::InvalidInput {
//!             field: "capacity_mva".to_string(),
//!             value: capacity_mva.to_string(),
//!             reason: "Transformer capacity must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for smelt_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Structured error type for design operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by host UIs and export layers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Smelting-product coefficient preset not found
    #[error("Coefficient preset not found: {preset_name}")]
    PresetNotFound { preset_name: String },

    /// Material not found in database
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// No standard metric thread at the requested nominal diameter
    #[error("No standard thread size M{nominal_mm}")]
    ThreadNotFound { nominal_mm: f64 },

    /// Calculation failed (degenerate geometry, no standard size fits, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DesignError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a PresetNotFound error
    pub fn preset_not_found(preset_name: impl Into<String>) -> Self {
        DesignError::PresetNotFound {
            preset_name: preset_name.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        DesignError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INVALID_INPUT",
            DesignError::PresetNotFound { .. } => "PRESET_NOT_FOUND",
            DesignError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            DesignError::ThreadNotFound { .. } => "THREAD_NOT_FOUND",
            DesignError::CalculationFailed { .. } => "CALCULATION_FAILED",
            DesignError::SerializationError { .. } => "SERIALIZATION_ERROR",
            DesignError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DesignError::invalid_input("lining_mm", "-200", "Lining thickness must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: DesignError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DesignError::preset_not_found("FeW").error_code(),
            "PRESET_NOT_FOUND"
        );
        assert_eq!(
            DesignError::material_not_found("60Si2Mn").error_code(),
            "MATERIAL_NOT_FOUND"
        );
    }

    #[test]
    fn test_error_display() {
        let error = DesignError::ThreadNotFound { nominal_mm: 13.0 };
        assert_eq!(error.to_string(), "No standard thread size M13");
    }
}
