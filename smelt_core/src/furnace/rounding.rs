//! Engineering Rounding
//!
//! Snapping of theoretical design values to fixed manufacturing increments.
//! Electrodes are pressed in 50 mm diameter steps, hearth masonry is laid
//! out on a 100 mm grid, and tap voltages are specified to the volt; the
//! increments below are those conventions, not tunables.
//!
//! Rounding is to the nearest multiple with ties away from zero
//! (`f64::round` semantics). All furnace quantities are positive, so ties
//! round up in practice; the rule is applied uniformly everywhere a value
//! is snapped.

/// Secondary voltage increment (V)
pub const VOLTAGE_STEP_V: f64 = 1.0;

/// Electrode diameter increment (mm)
pub const ELECTRODE_STEP_MM: f64 = 50.0;

/// Pole-circle diameter increment (mm)
pub const POLE_CIRCLE_STEP_MM: f64 = 50.0;

/// Hearth inner diameter increment (mm)
pub const HEARTH_DIAMETER_STEP_MM: f64 = 100.0;

/// Hearth depth increment (mm)
pub const HEARTH_DEPTH_STEP_MM: f64 = 100.0;

/// Round `value` to the nearest multiple of `increment`, ties away from
/// zero.
///
/// Shell dimensions are never passed through this function: they are sums
/// of an already-rounded value and a fixed allowance, so re-snapping them
/// would double-round.
///
/// # Example
///
/// ```rust
/// use smelt_core::furnace::rounding::round_to;
///
/// assert_eq!(round_to(1477.0, 50.0), 1500.0);
/// assert_eq!(round_to(3750.0, 100.0), 3800.0); // tie rounds up
/// ```
pub fn round_to(value: f64, increment: f64) -> f64 {
    (value / increment).round() * increment
}
