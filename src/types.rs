use std::fmt;

/// One snapshot of a controller's pose and input state.
///
/// Produced by the SDK on every poll; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSample {
    /// Position [x, y, z] in millimetres, relative to the active base.
    pub position: [f32; 3],
    /// 3x3 rotation matrix as reported by the SDK.
    pub rotation: [[f32; 3]; 3],
    /// Quaternion [qx, qy, qz, qw] matching the Sixense SDK convention.
    pub quaternion: [f32; 4],
    /// Analog stick [x, y], each in [-1, 1].
    pub joystick: [f32; 2],
    /// Trigger travel in [0, 1].
    pub trigger: f32,
    pub buttons: Buttons,
    /// Wraps at 255; changes whenever the SDK has a new packet.
    pub sequence_number: u8,
    pub firmware_revision: u16,
    pub hardware_revision: u16,
    /// Currently always 1.
    pub packet_type: u16,
    /// Unused by current hardware.
    pub magnetic_frequency: u16,
    pub enabled: bool,
    /// Hardware index of the controller that produced this sample.
    pub controller_index: i32,
    pub docked: bool,
    pub hand: Hand,
    /// Set once the controller was docked or hemisphere tracking was
    /// enabled some other way.
    pub hemi_tracking_enabled: bool,
}

impl ControllerSample {
    /// Euler angles [roll, pitch, yaw] in degrees derived from the quaternion.
    pub fn euler_deg(&self) -> [f64; 3] {
        let [x, y, z, w] = self.quaternion.map(f64::from);
        crate::convert::quaternion_to_euler(w, x, y, z)
    }

    pub fn is_pressed(&self, buttons: Buttons) -> bool {
        self.buttons.contains(buttons)
    }
}

bitflags::bitflags! {
    /// Button bitmask reported by a controller.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u32 {
        const START    = crate::ffi::SIXENSE_BUTTON_START;
        const BUTTON_3 = crate::ffi::SIXENSE_BUTTON_3;
        const BUTTON_4 = crate::ffi::SIXENSE_BUTTON_4;
        const BUTTON_1 = crate::ffi::SIXENSE_BUTTON_1;
        const BUTTON_2 = crate::ffi::SIXENSE_BUTTON_2;
        const BUMPER   = crate::ffi::SIXENSE_BUTTON_BUMPER;
        const JOYSTICK = crate::ffi::SIXENSE_BUTTON_JOYSTICK;
    }
}

impl fmt::Display for Buttons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{} (none)", self.bits());
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        write!(f, "{} ({})", self.bits(), names.join(" | "))
    }
}

/// Which hand a controller is assigned to.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hand {
    #[default]
    Unknown = 0,
    Left = 1,
    Right = 2,
}

impl From<u8> for Hand {
    fn from(raw: u8) -> Self {
        match raw {
            1 => Hand::Left,
            2 => Hand::Right,
            _ => Hand::Unknown,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hand::Unknown => "unknown",
            Hand::Left => "left",
            Hand::Right => "right",
        };
        f.write_str(name)
    }
}

/// Parameters of the SDK's distance-dependent jitter filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    pub near_range: f32,
    pub near_val: f32,
    pub far_range: f32,
    pub far_val: f32,
}

/// LED color of a wireless base station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}
