//! # smelt_core - Furnace & Ladle Design Calculation Engine
//!
//! `smelt_core` is the computational heart of Smeltcalc, deriving physical
//! design dimensions for electric smelting furnaces and molten-metal
//! ladles from a small set of process inputs. All inputs and outputs are
//! JSON-serializable, making the engine easy to drive from any host UI or
//! export layer.
//!
//! ## Design Philosophy
//!
//! - **One stateful object**: the furnace design session
//!   ([`furnace::FurnaceDesign`]) owns the rounded working parameters and
//!   the recompute cascade; everything else is a pure function
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Boundary validation**: formulas are total over validated inputs;
//!   hosts reject out-of-domain values before calling in
//!
//! ## Quick Start
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
//! let design = FurnaceDesign::new(inputs, SmeltingProduct::SiliconManganese.coefficients());
//!
//! // Serialize the session snapshot for display or transmission
//! let json = serde_json::to_string_pretty(design.rounded()).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`furnace`] - Furnace sizing: theoretical parameters, engineering
//!   rounding, and the override/cascade design session
//! - [`calculations`] - One-shot calculations (ladle, shaft, gear, bolt)
//! - [`materials`] - Coefficient presets and reference tables
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod furnace;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{DesignError, DesignResult};
pub use furnace::{DesignField, DesignState, FurnaceDesign, FurnaceInputs};
pub use materials::{CoefficientSet, SmeltingProduct};
