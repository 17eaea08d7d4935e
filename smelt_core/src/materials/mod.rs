//! # Reference Tables
//!
//! Read-only engineering reference data consumed by the calculations:
//! smelting-product empirical coefficients, shaft steel properties, and
//! standard metric thread dimensions. The tables are compiled in; nothing
//! here is ever written back at runtime. Per-field coefficient overrides
//! are applied to a *copy* of the preset, never to the preset itself.
//!
//! ## Example
//!
//! ```rust
//! use smelt_core::materials::{SmeltingProduct, ShaftMaterial};
//!
//! let coeffs = SmeltingProduct::SiliconManganese.coefficients();
//! assert_eq!(coeffs.ke, 6.3);
//!
//! let steel = ShaftMaterial::Steel45.properties();
//! println!("A0 = {}, σs = {} MPa", steel.a0, steel.sigma_s_mpa);
//! ```

pub mod shaft_steel;
pub mod smelting;
pub mod threads;

// Re-export smelting coefficient types
pub use smelting::{
    coefficient_set_by_name, list_product_names, CoefficientSet, SmeltingProduct,
};

// Re-export shaft material types
pub use shaft_steel::{ShaftMaterial, ShaftSteelProperties};

// Re-export thread table types
pub use threads::{thread_spec, ThreadSpec, METRIC_COARSE_THREADS};
