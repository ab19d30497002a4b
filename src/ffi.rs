//! Raw C ABI of the Sixense SDK (`sixense.h`).
//!
//! Layouts and constants mirror the vendor header. Nothing in here is safe to
//! call directly; `native::NativeSdk` resolves these entry points and wraps
//! them behind the `Sdk` trait.

use std::ffi::{c_float, c_int, c_uchar, c_uint, c_ushort};

// -- Status codes --
pub const SIXENSE_SUCCESS: c_int = 0;
pub const SIXENSE_FAILURE: c_int = -1;

/// Number of controller slots in `sixenseAllControllerData`.
pub const SIXENSE_MAX_CONTROLLERS: usize = 4;

// -- Button bitmask --
pub const SIXENSE_BUTTON_START: c_uint = 0x01 << 0;
pub const SIXENSE_BUTTON_3: c_uint = 0x01 << 3;
pub const SIXENSE_BUTTON_4: c_uint = 0x01 << 4;
pub const SIXENSE_BUTTON_1: c_uint = 0x01 << 5;
pub const SIXENSE_BUTTON_2: c_uint = 0x01 << 6;
pub const SIXENSE_BUTTON_BUMPER: c_uint = 0x01 << 7;
pub const SIXENSE_BUTTON_JOYSTICK: c_uint = 0x01 << 8;

/// `sixenseControllerData`, field order and types as in the vendor header.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawControllerData {
    pub pos: [c_float; 3],
    pub rot_mat: [[c_float; 3]; 3],
    pub joystick_x: c_float,
    pub joystick_y: c_float,
    pub trigger: c_float,
    pub buttons: c_uint,
    pub sequence_number: c_uchar,
    pub rot_quat: [c_float; 4],
    pub firmware_revision: c_ushort,
    pub hardware_revision: c_ushort,
    pub packet_type: c_ushort,
    pub magnetic_frequency: c_ushort,
    pub enabled: c_int,
    pub controller_index: c_int,
    pub is_docked: c_uchar,
    pub which_hand: c_uchar,
    pub hemi_tracking_enabled: c_uchar,
}

/// `sixenseAllControllerData`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawAllControllerData {
    pub controllers: [RawControllerData; SIXENSE_MAX_CONTROLLERS],
}

// -- Entry point signatures --
pub type VoidFn = unsafe extern "C" fn() -> c_int;
pub type IndexFn = unsafe extern "C" fn(c_int) -> c_int;
pub type GetDataFn = unsafe extern "C" fn(c_int, c_int, *mut RawControllerData) -> c_int;
pub type GetAllDataFn = unsafe extern "C" fn(c_int, *mut RawAllControllerData) -> c_int;
pub type GetNewestDataFn = unsafe extern "C" fn(c_int, *mut RawControllerData) -> c_int;
pub type GetAllNewestDataFn = unsafe extern "C" fn(*mut RawAllControllerData) -> c_int;
pub type SetHemisphereFn = unsafe extern "C" fn(c_int, c_int) -> c_int;
pub type GetHemisphereFn = unsafe extern "C" fn(c_int, *mut c_int) -> c_int;
pub type GetFlagFn = unsafe extern "C" fn(*mut c_int) -> c_int;
pub type TriggerVibrationFn = unsafe extern "C" fn(c_int, c_int, c_int) -> c_int;
pub type SetFilterParamsFn = unsafe extern "C" fn(c_float, c_float, c_float, c_float) -> c_int;
pub type GetFilterParamsFn =
    unsafe extern "C" fn(*mut c_float, *mut c_float, *mut c_float, *mut c_float) -> c_int;
pub type SetBaseColorFn = unsafe extern "C" fn(c_uchar, c_uchar, c_uchar) -> c_int;
pub type GetBaseColorFn = unsafe extern "C" fn(*mut c_uchar, *mut c_uchar, *mut c_uchar) -> c_int;

/// Resolved entry points of a loaded Sixense library.
#[derive(Clone, Copy)]
pub struct Api {
    pub init: VoidFn,
    pub exit: VoidFn,
    pub get_max_bases: VoidFn,
    pub set_active_base: IndexFn,
    pub is_base_connected: IndexFn,
    pub get_max_controllers: VoidFn,
    pub is_controller_enabled: IndexFn,
    pub get_num_active_controllers: VoidFn,
    pub get_history_size: VoidFn,
    pub get_data: GetDataFn,
    pub get_all_data: GetAllDataFn,
    pub get_newest_data: GetNewestDataFn,
    pub get_all_newest_data: GetAllNewestDataFn,
    pub set_hemisphere_tracking_mode: SetHemisphereFn,
    pub get_hemisphere_tracking_mode: GetHemisphereFn,
    pub auto_enable_hemisphere_tracking: IndexFn,
    pub set_high_priority_binding_enabled: IndexFn,
    pub get_high_priority_binding_enabled: GetFlagFn,
    pub trigger_vibration: TriggerVibrationFn,
    pub set_filter_enabled: IndexFn,
    pub get_filter_enabled: GetFlagFn,
    pub set_filter_params: SetFilterParamsFn,
    pub get_filter_params: GetFilterParamsFn,
    pub set_base_color: SetBaseColorFn,
    pub get_base_color: GetBaseColorFn,
}

/// Library file names tried, in order, when no explicit path is configured.
#[cfg(target_os = "windows")]
pub const LIBRARY_NAMES: &[&str] = &["sixense_x64.dll", "sixense.dll"];
#[cfg(target_os = "macos")]
pub const LIBRARY_NAMES: &[&str] = &["libsixense_x64.dylib", "libsixense.dylib"];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const LIBRARY_NAMES: &[&str] = &["libsixense_x64.so", "libsixense.so"];
