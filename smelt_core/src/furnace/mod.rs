//! # Submerged-Arc Furnace Sizing
//!
//! The furnace parameter derivation pipeline:
//!
//! 1. [`theoretical`] - exact-valued design parameters from the process
//!    inputs and the empirical coefficient set (pure function).
//! 2. [`rounding`] - engineering rounding of each parameter to its fixed
//!    manufacturing increment.
//! 3. [`design`] - the working design state: rounded parameters plus the
//!    recompute cascade that runs when the electrode diameter anchor
//!    changes, and the isolated overrides for everything else.
//!
//! ## Example
//!
//! ```rust
//! use smelt_core::furnace::{FurnaceDesign, FurnaceInputs};
//! use smelt_core::materials::SmeltingProduct;
//!
//! let inputs = FurnaceInputs {
//!     capacity_mva: 33.0,
//!     primary_kv: 35.0,
//!     lining_mm: 1200.0,
//! };
//! let coeffs = SmeltingProduct::SiliconManganese.coefficients();
//!
//! let design = FurnaceDesign::new(inputs, coeffs);
//! println!("De = {} mm", design.rounded().de_mm);
//! ```

pub mod design;
pub mod rounding;
pub mod theoretical;

// Re-export the working set
pub use design::{DesignField, DesignState, FurnaceDesign, RoundedParameters};
pub use rounding::round_to;
pub use theoretical::{theoretical, FurnaceInputs, TheoreticalParameters};
