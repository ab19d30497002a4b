use crate::types::{BaseColor, ControllerSample, FilterParams};
use crate::Result;
use std::time::Duration;

/// Capability surface of the Sixense SDK.
///
/// Implemented by `NativeSdk` for the real vendor library. Status codes are
/// already mapped to `Result` at this seam; callers never see raw statuses.
/// Indices are passed through unchecked, `Session` is responsible for bounds.
pub trait Sdk {
    /// Initialize the SDK. Must succeed before any other call.
    fn init(&self) -> Result<()>;

    /// Tear the SDK down. Pairs with a successful `init`.
    fn exit(&self) -> Result<()>;

    /// Maximum number of supported base stations (currently 4).
    fn max_bases(&self) -> usize;

    fn is_base_connected(&self, base: usize) -> bool;

    /// Make `base` the target of every subsequent base-related call.
    fn set_active_base(&self, base: usize) -> Result<()>;

    /// Maximum number of controllers per base.
    fn max_controllers(&self) -> usize;

    fn is_controller_enabled(&self, which: usize) -> bool;

    /// Number of active controllers on the active base.
    fn num_active_controllers(&self) -> usize;

    /// How many past samples the SDK keeps per controller (usually 10).
    fn history_size(&self) -> usize;

    /// Sample from `index_back` polls ago for one controller.
    fn data(&self, which: usize, index_back: usize) -> Result<ControllerSample>;

    /// Sample from `index_back` polls ago for every controller slot.
    fn all_data(&self, index_back: usize) -> Result<Vec<ControllerSample>>;

    /// Newest sample for one controller.
    fn newest_data(&self, which: usize) -> Result<ControllerSample>;

    /// Newest sample for every controller slot.
    fn all_newest_data(&self) -> Result<Vec<ControllerSample>>;

    fn hemisphere_tracking_mode(&self, which: usize) -> Result<bool>;

    fn set_hemisphere_tracking_mode(&self, which: usize, enabled: bool) -> Result<()>;

    /// Deprecated by the vendor; docking enables hemisphere tracking.
    fn auto_enable_hemisphere_tracking(&self, which: usize) -> Result<()>;

    /// Wireless devices only.
    fn high_priority_binding_enabled(&self) -> Result<bool>;

    fn set_high_priority_binding_enabled(&self, enabled: bool) -> Result<()>;

    /// Vibrate a controller for `duration`, rounded to 100 ms units.
    /// Not supported by the Razer Hydra. `pattern` is currently ignored by the SDK.
    fn trigger_vibration(&self, which: usize, duration: Duration, pattern: u8) -> Result<()>;

    fn filter_enabled(&self) -> Result<bool>;

    fn set_filter_enabled(&self, enabled: bool) -> Result<()>;

    fn filter_params(&self) -> Result<FilterParams>;

    fn set_filter_params(&self, params: FilterParams) -> Result<()>;

    /// Wireless devkits only.
    fn base_color(&self) -> Result<BaseColor>;

    fn set_base_color(&self, color: BaseColor) -> Result<()>;
}

/// Convert a duration into the SDK's 100 ms vibration units, rounding to nearest.
pub fn vibration_units(duration: Duration) -> i32 {
    let units = (duration.as_millis() + 50) / 100;
    units.min(i32::MAX as u128) as i32
}
