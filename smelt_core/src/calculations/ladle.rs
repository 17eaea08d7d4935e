//! # Ladle Geometry
//!
//! Sizes a molten-metal transfer ladle for a target working volume. The
//! vessel is a frustum: total height `H`, top outer diameter `ar·H` from
//! the diameter-to-height ratio, bottom outer diameter narrowed by the
//! wall taper angle. The working cavity is the inner frustum left after
//! subtracting wall thickness from both radii, sitting on the bottom plate
//! and stopping a freeboard below the rim.
//!
//! No closed form expresses `H` from the target volume, but the cavity
//! volume is strictly increasing in `H` for fixed ratio/angle/thicknesses
//! (a taller vessel is also proportionally wider), so a bounded bisection
//! finds it.
//!
//! ## Assumptions
//!
//! - Linear taper, circular sections
//! - Wall thickness constant over the height
//! - Freeboard measured from the rim down to the working level
//!
//! ## Example
//!
//! ```rust
//! use smelt_core::calculations::ladle::{calculate, LadleInput};
//!
//! let input = LadleInput {
//!     label: "L-1".to_string(),
//!     target_volume_m3: 4.5,
//!     density_t_m3: 6.1,
//!     freeboard_mm: 300.0,
//!     wall_mm: 160.0,
//!     bottom_mm: 230.0,
//!     taper_deg: 5.0,
//!     diameter_height_ratio: 1.05,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("H = {:.2} m, load = {:.1} t", result.height_m, result.load_mass_t);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::units::{Degrees, Meters, Millimeters, Radians};

/// Lower bisection bracket (m) - below any ladle in this equipment class
pub const BRACKET_LO_M: f64 = 0.5;

/// Upper bisection bracket (m)
pub const BRACKET_HI_M: f64 = 10.0;

/// Fixed bisection iteration budget. 2⁻⁵⁰ of the 9.5 m bracket is far
/// below a millimetre, so no separate tolerance check is needed.
pub const BISECTION_ITERATIONS: usize = 50;

/// Input parameters for a ladle design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "L-1",
///   "target_volume_m3": 4.5,
///   "density_t_m3": 6.1,
///   "freeboard_mm": 300.0,
///   "wall_mm": 160.0,
///   "bottom_mm": 230.0,
///   "taper_deg": 5.0,
///   "diameter_height_ratio": 1.05
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadleInput {
    /// User label for this ladle (e.g., "L-1", "Tapping ladle 6t")
    pub label: String,

    /// Required working (liquid) volume (m³)
    pub target_volume_m3: f64,

    /// Melt density (t/m³), for the load mass
    pub density_t_m3: f64,

    /// Freeboard from rim to working level (mm)
    pub freeboard_mm: f64,

    /// Side wall thickness, shell plus lining (mm)
    pub wall_mm: f64,

    /// Bottom thickness, plate plus lining (mm)
    pub bottom_mm: f64,

    /// Wall taper angle from vertical (degrees)
    pub taper_deg: f64,

    /// Top outer diameter to total height ratio
    pub diameter_height_ratio: f64,
}

impl LadleInput {
    /// Validate input parameters.
    pub fn validate(&self) -> DesignResult<()> {
        for (name, value) in [
            ("target_volume_m3", self.target_volume_m3),
            ("density_t_m3", self.density_t_m3),
            ("freeboard_mm", self.freeboard_mm),
            ("wall_mm", self.wall_mm),
            ("bottom_mm", self.bottom_mm),
            ("diameter_height_ratio", self.diameter_height_ratio),
        ] {
            if value <= 0.0 {
                return Err(DesignError::invalid_input(
                    name,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        if self.taper_deg < 0.0 || self.taper_deg >= 45.0 {
            return Err(DesignError::invalid_input(
                "taper_deg",
                self.taper_deg.to_string(),
                "Taper angle must be in [0, 45)",
            ));
        }
        Ok(())
    }
}

/// Results from a ladle design.
///
/// Everything besides the solved height is a direct function of the
/// height and the inputs; nothing else is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadleResult {
    /// Solved total height (m)
    pub height_m: f64,
    /// Top outer diameter (m)
    pub top_od_m: f64,
    /// Bottom outer diameter (m)
    pub bottom_od_m: f64,
    /// Working cavity height (m)
    pub cavity_height_m: f64,
    /// Cavity volume achieved at the solved height (m³)
    ///
    /// Within solver resolution of the target unless the target was
    /// unreachable inside the height bracket; compare against the target
    /// for a plausibility check.
    pub cavity_volume_m3: f64,
    /// Melt mass at the achieved volume (t)
    pub load_mass_t: f64,
}

/// Working cavity volume at a candidate total height (m³).
///
/// Degenerate candidates (radii or cavity height non-positive) count as
/// zero volume rather than an error, so the bisection keeps moving toward
/// larger heights.
pub fn cavity_volume(input: &LadleInput, height_m: f64) -> f64 {
    let wall_m = Meters::from(Millimeters(input.wall_mm)).0;
    let bottom_m = Meters::from(Millimeters(input.bottom_mm)).0;
    let freeboard_m = Meters::from(Millimeters(input.freeboard_mm)).0;
    let taper = Radians::from(Degrees(input.taper_deg));

    let top_r = input.diameter_height_ratio * height_m / 2.0;
    let bottom_r = top_r - height_m * taper.0.tan();

    let cavity_top_r = top_r - wall_m;
    let cavity_bottom_r = bottom_r - wall_m;
    let cavity_h = height_m - freeboard_m - bottom_m;

    if cavity_top_r <= 0.0 || cavity_bottom_r <= 0.0 || cavity_h <= 0.0 {
        return 0.0;
    }

    let (r1, r2) = (cavity_top_r, cavity_bottom_r);
    std::f64::consts::PI * cavity_h / 3.0 * (r1 * r1 + r1 * r2 + r2 * r2)
}

/// Solve the total height whose cavity volume meets the target (m).
///
/// Bisection over the fixed `[0.5, 10.0]` m bracket for a fixed 50
/// iterations, licensed by the strict monotonicity of [`cavity_volume`]
/// in the height. A target outside the bracket saturates silently at the
/// nearest bound; callers needing a feasibility guarantee must compare
/// the achieved volume against the target themselves.
pub fn solve_height(input: &LadleInput) -> f64 {
    let mut lo = BRACKET_LO_M;
    let mut hi = BRACKET_HI_M;

    for _ in 0..BISECTION_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if cavity_volume(input, mid) < input.target_volume_m3 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    0.5 * (lo + hi)
}

/// Solve the ladle geometry for the target volume.
///
/// # Arguments
///
/// * `input` - Ladle parameters (target volume, thicknesses, taper, ratio)
///
/// # Returns
///
/// * `Ok(LadleResult)` - Solved height with derived geometry and load
/// * `Err(DesignError)` - Structured error if inputs are invalid
pub fn calculate(input: &LadleInput) -> DesignResult<LadleResult> {
    input.validate()?;

    let height_m = solve_height(input);
    let taper = Radians::from(Degrees(input.taper_deg));
    let top_od_m = input.diameter_height_ratio * height_m;
    let bottom_od_m = top_od_m - 2.0 * height_m * taper.0.tan();
    let cavity_height_m = height_m - Meters::from(Millimeters(input.freeboard_mm + input.bottom_mm)).0;
    let cavity_volume_m3 = cavity_volume(input, height_m);

    Ok(LadleResult {
        height_m,
        top_od_m,
        bottom_od_m,
        cavity_height_m,
        cavity_volume_m3,
        load_mass_t: cavity_volume_m3 * input.density_t_m3,
    })
}
