//! Working Design State
//!
//! [`FurnaceDesign`] owns the authoritative, engineering-rounded parameter
//! set for one design session and the recompute rules between its fields.
//! The electrode diameter is the anchor: it is the physically binding
//! constraint every other furnace dimension is proportioned from, so a
//! changed anchor re-derives everything downstream. Every other field is a
//! terminal output the engineer may pin to an as-built value; pinning one
//! never propagates further because nothing is downstream of it.
//!
//! Downstream snapping always starts from the *rounded* anchor
//! (`round_to(rounded_de · K, step)`), both at reset and on an anchor
//! override, so the two paths agree.
//!
//! Out-of-domain values (zero, negative) are the host's to reject before
//! calling in; no update here fails.
//!
//! ## Example
//!
//! ```rust
//! use smelt_core::furnace::{DesignField, FurnaceDesign, FurnaceInputs};
//! use smelt_core::materials::SmeltingProduct;
//!
//! let inputs = FurnaceInputs {
//!     capacity_mva: 33.0,
//!     primary_kv: 35.0,
//!     lining_mm: 1200.0,
//! };
//! let mut design = FurnaceDesign::new(inputs, SmeltingProduct::SiliconManganese.coefficients());
//!
//! // Pin the electrode at the as-built press size; everything downstream
//! // follows.
//! design.apply_override(DesignField::ElectrodeDiameter, 1400.0);
//! assert_eq!(design.rounded().dc_mm, 3800.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::furnace::rounding::{
    round_to, ELECTRODE_STEP_MM, HEARTH_DEPTH_STEP_MM, HEARTH_DIAMETER_STEP_MM,
    POLE_CIRCLE_STEP_MM, VOLTAGE_STEP_V,
};
use crate::furnace::theoretical::{theoretical, FurnaceInputs, TheoreticalParameters, SQRT_3};
use crate::materials::CoefficientSet;

/// Lifecycle of the rounded parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignState {
    /// No parameters computed yet
    Uninitialized,
    /// Every field is the formula-consistent image of the current anchor
    Initialized,
    /// At least one leaf field was pinned to a direct value
    Overridden,
}

/// User-overridable fields of [`RoundedParameters`].
///
/// Secondary current is absent on purpose: it is display-only, derived
/// from the current secondary voltage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignField {
    /// Secondary voltage U2 (V) - independent of the anchor
    SecondaryVoltage,
    /// Electrode diameter De (mm) - the anchor; cascades downstream
    ElectrodeDiameter,
    /// Pole-circle diameter Dc (mm)
    PoleCircleDiameter,
    /// Hearth inner diameter Di (mm)
    HearthDiameter,
    /// Hearth depth Hh (mm)
    HearthDepth,
    /// Shell inner diameter (mm)
    ShellInnerDiameter,
    /// Shell height (mm)
    ShellHeight,
}

/// The authoritative rounded design values.
///
/// Initialized from the theoretical set via the increment table, then
/// partially rewritten by anchor cascades and user overrides.
///
/// ## JSON Example
///
/// ```json
/// {
///   "u2_v": 202.0, "i2_a": 94320.0,
///   "de_mm": 1500.0, "dc_mm": 4050.0,
///   "di_mm": 9600.0, "hh_mm": 3800.0,
///   "shell_id_mm": 12000.0, "shell_h_mm": 5800.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoundedParameters {
    /// Secondary voltage U2 (V), snapped to 1 V
    pub u2_v: f64,
    /// Secondary current I2 (A) - display value recomputed from `u2_v`
    pub i2_a: f64,
    /// Electrode diameter De (mm), snapped to 50 mm
    pub de_mm: f64,
    /// Pole-circle diameter Dc (mm), snapped to 50 mm
    pub dc_mm: f64,
    /// Hearth inner diameter Di (mm), snapped to 100 mm
    pub di_mm: f64,
    /// Hearth depth Hh (mm), snapped to 100 mm
    pub hh_mm: f64,
    /// Shell inner diameter (mm) - `di_mm + 2·lining`, never re-snapped
    pub shell_id_mm: f64,
    /// Shell height (mm) - `hh_mm + 2000`, never re-snapped
    pub shell_h_mm: f64,
}

/// One furnace design session: inputs, coefficient set, theoretical and
/// rounded parameters, and the propagation state machine over them.
///
/// Owned by exactly one session; the engine keeps no other state, so
/// parallel sessions are just independent `FurnaceDesign` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnaceDesign {
    inputs: FurnaceInputs,
    coeffs: CoefficientSet,
    theoretical: TheoreticalParameters,
    rounded: RoundedParameters,
    state: DesignState,
}

impl FurnaceDesign {
    /// Create a design session and initialize it from `inputs` + `coeffs`.
    pub fn new(inputs: FurnaceInputs, coeffs: CoefficientSet) -> Self {
        let mut design = FurnaceDesign {
            inputs,
            coeffs,
            theoretical: theoretical(&inputs, &coeffs),
            rounded: RoundedParameters::default(),
            state: DesignState::Uninitialized,
        };
        design.reset(inputs, coeffs);
        design
    }

    /// Full reset: recompute the theoretical set and re-derive every
    /// rounded field from the anchor. Discards all overrides.
    ///
    /// Call this whenever the process inputs or the coefficient set change;
    /// the stored copies are replaced wholesale.
    pub fn reset(&mut self, inputs: FurnaceInputs, coeffs: CoefficientSet) {
        self.inputs = inputs;
        self.coeffs = coeffs;
        self.theoretical = theoretical(&inputs, &coeffs);

        self.rounded.u2_v = round_to(self.theoretical.u2_v, VOLTAGE_STEP_V);
        self.rounded.de_mm = round_to(self.theoretical.de_mm, ELECTRODE_STEP_MM);
        self.cascade_from_anchor();
        self.rounded.i2_a = self.displayed_i2(self.rounded.u2_v);

        self.state = DesignState::Initialized;
    }

    /// Apply a user override to one field.
    ///
    /// Overriding the anchor (electrode diameter) re-derives every
    /// downstream field from the new value, discarding any prior leaf
    /// overrides of those fields; the voltage pair is left alone. Any
    /// other field is pinned in isolation. The value is taken as given -
    /// the anchor is not re-snapped, so an off-increment press size stays
    /// exactly what the engineer typed.
    pub fn apply_override(&mut self, field: DesignField, value: f64) {
        match field {
            DesignField::ElectrodeDiameter => {
                self.rounded.de_mm = value;
                self.cascade_from_anchor();
                self.state = DesignState::Initialized;
            }
            DesignField::SecondaryVoltage => {
                self.rounded.u2_v = value;
                self.rounded.i2_a = self.displayed_i2(value);
                self.state = DesignState::Overridden;
            }
            DesignField::PoleCircleDiameter => {
                self.rounded.dc_mm = value;
                self.state = DesignState::Overridden;
            }
            DesignField::HearthDiameter => {
                self.rounded.di_mm = value;
                self.state = DesignState::Overridden;
            }
            DesignField::HearthDepth => {
                self.rounded.hh_mm = value;
                self.state = DesignState::Overridden;
            }
            DesignField::ShellInnerDiameter => {
                self.rounded.shell_id_mm = value;
                self.state = DesignState::Overridden;
            }
            DesignField::ShellHeight => {
                self.rounded.shell_h_mm = value;
                self.state = DesignState::Overridden;
            }
        }
    }

    /// Recompute everything downstream of the anchor from the current
    /// rounded electrode diameter.
    ///
    /// Single rounding rule for both entry paths: proportion from the
    /// rounded anchor, then snap per the increment table. Shell dimensions
    /// are additive on the snapped values and are not re-snapped.
    fn cascade_from_anchor(&mut self) {
        let de = self.rounded.de_mm;

        self.rounded.dc_mm = round_to(de * self.coeffs.ky, POLE_CIRCLE_STEP_MM);
        self.rounded.di_mm = round_to(de * self.coeffs.ki, HEARTH_DIAMETER_STEP_MM);
        self.rounded.hh_mm = round_to(de * self.coeffs.kh, HEARTH_DEPTH_STEP_MM);
        self.rounded.shell_id_mm = self.rounded.di_mm + 2.0 * self.inputs.lining_mm;
        self.rounded.shell_h_mm = self.rounded.hh_mm + crate::furnace::theoretical::SHELL_HEADROOM_MM;
    }

    /// Secondary current implied by a secondary voltage at the session's
    /// transformer capacity. Display-only.
    fn displayed_i2(&self, u2_v: f64) -> f64 {
        1000.0 * self.inputs.capacity_kva() / (SQRT_3 * u2_v)
    }

    /// Process inputs this session was last reset with
    pub fn inputs(&self) -> &FurnaceInputs {
        &self.inputs
    }

    /// Coefficient set this session was last reset with
    pub fn coeffs(&self) -> &CoefficientSet {
        &self.coeffs
    }

    /// Exact-valued parameters (read-only reference column)
    pub fn theoretical(&self) -> &TheoreticalParameters {
        &self.theoretical
    }

    /// Authoritative rounded parameters (working column)
    pub fn rounded(&self) -> &RoundedParameters {
        &self.rounded
    }

    /// Current propagation state
    pub fn state(&self) -> DesignState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SmeltingProduct;

    fn test_design() -> FurnaceDesign {
        let inputs = FurnaceInputs {
            capacity_mva: 33.0,
            primary_kv: 35.0,
            lining_mm: 1200.0,
        };
        FurnaceDesign::new(inputs, SmeltingProduct::SiliconManganese.coefficients())
    }

    #[test]
    fn test_initialization_snaps_every_field() {
        let design = test_design();
        assert_eq!(design.state(), DesignState::Initialized);

        let r = design.rounded();
        // De theoretical ≈ 1478 mm → 1500; downstream from the rounded anchor:
        assert_eq!(r.u2_v, 202.0);
        assert_eq!(r.de_mm, 1500.0);
        assert_eq!(r.dc_mm, 4050.0); // 1500·2.7 = 4050, already a multiple
        assert_eq!(r.di_mm, 9600.0); // 1500·6.4 = 9600
        assert_eq!(r.hh_mm, 3800.0); // 1500·2.5 = 3750, tie rounds up
        assert_eq!(r.shell_id_mm, 12000.0); // 9600 + 2·1200
        assert_eq!(r.shell_h_mm, 5800.0); // 3800 + 2000
    }

    #[test]
    fn test_displayed_i2_follows_rounded_voltage() {
        let design = test_design();
        let expected = 33_000_000.0 / (SQRT_3 * 202.0);
        assert!((design.rounded().i2_a - expected).abs() < 1e-6);
    }

    #[test]
    fn test_anchor_override_cascades() {
        let mut design = test_design();
        let u2_before = design.rounded().u2_v;
        let i2_before = design.rounded().i2_a;

        design.apply_override(DesignField::ElectrodeDiameter, 1400.0);

        let r = design.rounded();
        assert_eq!(r.de_mm, 1400.0);
        assert_eq!(r.dc_mm, 3800.0); // 1400·2.7 = 3780 → 3800
        assert_eq!(r.di_mm, 9000.0); // 1400·6.4 = 8960 → 9000
        assert_eq!(r.hh_mm, 3500.0); // 1400·2.5 = 3500
        assert_eq!(r.shell_id_mm, 11400.0);
        assert_eq!(r.shell_h_mm, 5500.0);

        // The voltage pair is independent of the anchor
        assert_eq!(r.u2_v, u2_before);
        assert_eq!(r.i2_a, i2_before);
        assert_eq!(design.state(), DesignState::Initialized);
    }

    #[test]
    fn test_anchor_value_taken_as_given() {
        let mut design = test_design();
        // An off-increment press size is preserved, not re-snapped
        design.apply_override(DesignField::ElectrodeDiameter, 1430.0);
        assert_eq!(design.rounded().de_mm, 1430.0);
        // 1430·2.7 = 3861 → 3850
        assert_eq!(design.rounded().dc_mm, 3850.0);
    }

    #[test]
    fn test_leaf_override_is_isolated() {
        let mut design = test_design();
        let before = *design.rounded();

        design.apply_override(DesignField::PoleCircleDiameter, 4000.0);

        let r = design.rounded();
        assert_eq!(r.dc_mm, 4000.0);
        assert_eq!(r.de_mm, before.de_mm);
        assert_eq!(r.di_mm, before.di_mm);
        assert_eq!(r.hh_mm, before.hh_mm);
        assert_eq!(r.shell_id_mm, before.shell_id_mm);
        assert_eq!(r.shell_h_mm, before.shell_h_mm);
        assert_eq!(design.state(), DesignState::Overridden);
    }

    #[test]
    fn test_hearth_depth_override_leaves_shell_height() {
        let mut design = test_design();
        let shell_h_before = design.rounded().shell_h_mm;

        design.apply_override(DesignField::HearthDepth, 4000.0);

        // Shell height would normally derive from Hh, but a pinned leaf
        // does not propagate
        assert_eq!(design.rounded().hh_mm, 4000.0);
        assert_eq!(design.rounded().shell_h_mm, shell_h_before);
    }

    #[test]
    fn test_voltage_override_recomputes_current_only() {
        let mut design = test_design();
        let before = *design.rounded();

        design.apply_override(DesignField::SecondaryVoltage, 210.0);

        let r = design.rounded();
        assert_eq!(r.u2_v, 210.0);
        let expected_i2 = 33_000_000.0 / (SQRT_3 * 210.0);
        assert!((r.i2_a - expected_i2).abs() < 1e-6);
        assert_eq!(r.de_mm, before.de_mm);
        assert_eq!(r.dc_mm, before.dc_mm);
        assert_eq!(design.state(), DesignState::Overridden);
    }

    #[test]
    fn test_anchor_change_overwrites_stale_leaf_override() {
        let mut design = test_design();

        design.apply_override(DesignField::PoleCircleDiameter, 4444.0);
        assert_eq!(design.state(), DesignState::Overridden);

        design.apply_override(DesignField::ElectrodeDiameter, 1500.0);

        // The stale Dc override is deterministically overwritten
        assert_eq!(design.rounded().dc_mm, 4050.0);
        assert_eq!(design.state(), DesignState::Initialized);
    }

    #[test]
    fn test_reset_discards_overrides() {
        let mut design = test_design();
        design.apply_override(DesignField::HearthDiameter, 8888.0);

        let inputs = *design.inputs();
        let coeffs = *design.coeffs();
        design.reset(inputs, coeffs);

        assert_eq!(design.rounded().di_mm, 9600.0);
        assert_eq!(design.state(), DesignState::Initialized);
    }

    #[test]
    fn test_reset_with_new_coefficients() {
        let mut design = test_design();
        let inputs = *design.inputs();
        design.reset(inputs, SmeltingProduct::Ferrosilicon75.coefficients());

        // FeSi75: J = 6.5 shrinks the electrode; De theo ≈ 1308 → 1300
        assert_eq!(design.rounded().de_mm, 1300.0);
        assert_eq!(design.rounded().dc_mm, round_to(1300.0 * 2.25, 50.0));
    }

    #[test]
    fn test_session_snapshot_roundtrip() {
        let mut design = test_design();
        design.apply_override(DesignField::ShellHeight, 6000.0);

        let json = serde_json::to_string(&design).unwrap();
        let roundtrip: FurnaceDesign = serde_json::from_str(&json).unwrap();
        assert_eq!(design, roundtrip);
        assert_eq!(roundtrip.state(), DesignState::Overridden);
    }
}
