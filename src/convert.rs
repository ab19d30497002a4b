use crate::ffi::{RawAllControllerData, RawControllerData};
use crate::types::{Buttons, ControllerSample, Hand};

impl From<&RawControllerData> for ControllerSample {
    fn from(raw: &RawControllerData) -> Self {
        ControllerSample {
            position: raw.pos,
            rotation: raw.rot_mat,
            quaternion: raw.rot_quat,
            joystick: [raw.joystick_x, raw.joystick_y],
            trigger: raw.trigger,
            buttons: Buttons::from_bits_truncate(raw.buttons),
            sequence_number: raw.sequence_number,
            firmware_revision: raw.firmware_revision,
            hardware_revision: raw.hardware_revision,
            packet_type: raw.packet_type,
            magnetic_frequency: raw.magnetic_frequency,
            enabled: raw.enabled != 0,
            controller_index: raw.controller_index,
            docked: raw.is_docked != 0,
            hand: Hand::from(raw.which_hand),
            hemi_tracking_enabled: raw.hemi_tracking_enabled != 0,
        }
    }
}

/// Convert every controller slot of an all-data snapshot.
pub fn all_samples(raw: &RawAllControllerData) -> Vec<ControllerSample> {
    raw.controllers.iter().map(ControllerSample::from).collect()
}

/// Convert quaternion [w, x, y, z] to Euler angles [roll, pitch, yaw] in degrees.
///
/// Sixense uses a right-handed frame with Y up and Z towards the user, so
/// roll is about Z, pitch about X and yaw about Y (YXZ order):
///   roll  = atan2(2(xy+wz), 1 - 2(x²+z²))
///   pitch = asin(2(wx-yz))
///   yaw   = atan2(2(xz+wy), 1 - 2(x²+y²))
pub fn quaternion_to_euler(w: f64, x: f64, y: f64, z: f64) -> [f64; 3] {
    let roll = (2.0 * (x * y + w * z)).atan2(1.0 - 2.0 * (x * x + z * z));
    let pitch = (2.0 * (w * x - y * z)).clamp(-1.0, 1.0).asin();
    let yaw = (2.0 * (x * z + w * y)).atan2(1.0 - 2.0 * (x * x + y * y));
    [roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()]
}
