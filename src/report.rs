use crate::types::ControllerSample;
use std::fmt::Write;

/// Render a sample as the human-readable block printed by the dump driver.
pub fn format_sample(controller: usize, sample: &ControllerSample) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_sample(&mut out, controller, sample);
    out
}

fn write_sample(out: &mut String, controller: usize, s: &ControllerSample) -> std::fmt::Result {
    writeln!(out, "Controller {} data:", controller)?;
    writeln!(out, "    Position: {:?}", s.position)?;
    writeln!(out, "    Rotation Matrix:")?;
    for row in &s.rotation {
        writeln!(out, "        {:?}", row)?;
    }
    writeln!(out, "    Rotation Quaternion:")?;
    writeln!(out, "        {:?}", s.quaternion)?;
    writeln!(out, "    joystick x: {}", s.joystick[0])?;
    writeln!(out, "    joystick y: {}", s.joystick[1])?;
    writeln!(out, "    trigger: {}", s.trigger)?;
    writeln!(out, "    buttons: {}", s.buttons)?;
    writeln!(out, "    sequence number: {}", s.sequence_number)?;
    writeln!(out, "    firmware revision: {}", s.firmware_revision)?;
    writeln!(out, "    hardware revision: {}", s.hardware_revision)?;
    writeln!(out, "    packet type: {}", s.packet_type)?;
    writeln!(out, "    magnetic frequency: {}", s.magnetic_frequency)?;
    writeln!(out, "    enabled: {}", s.enabled)?;
    writeln!(out, "    index: {}", s.controller_index)?;
    writeln!(out, "    docked: {}", s.docked)?;
    writeln!(out, "    hand: {}", s.hand)?;
    writeln!(out, "    hemisphere tracking: {}", s.hemi_tracking_enabled)?;
    Ok(())
}

/// One-line summary used by the streaming demo.
pub fn format_sample_line(controller: usize, s: &ControllerSample) -> String {
    let [roll, pitch, yaw] = s.euler_deg();
    format!(
        "c{} seq={:<3} pos=[{:+8.1}, {:+8.1}, {:+8.1}]  rpy=[{:+6.1}, {:+6.1}, {:+6.1}]  stick=[{:+.2}, {:+.2}]  trig={:.2}  btn={:#05x}",
        controller,
        s.sequence_number,
        s.position[0],
        s.position[1],
        s.position[2],
        roll,
        pitch,
        yaw,
        s.joystick[0],
        s.joystick[1],
        s.trigger,
        s.buttons.bits(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::types::Buttons;

    #[test]
    fn test_format_sample_block() {
        let mut sample = mock::sample(1, 42);
        sample.buttons = Buttons::START | Buttons::JOYSTICK;
        let text = format_sample(1, &sample);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Controller 1 data:");
        assert_eq!(lines[1], "    Position: [100.0, 50.0, -250.0]");
        assert_eq!(lines[3], "        [1.0, 0.0, 0.0]");
        assert_eq!(lines[7], "        [0.0, 0.0, 0.0, 1.0]");
        assert!(text.contains("    trigger: 0.5\n"));
        assert!(text.contains("    buttons: 257 (START | JOYSTICK)\n"));
        assert!(text.contains("    sequence number: 42\n"));
        assert!(text.contains("    index: 1\n"));
        assert!(text.contains("    hand: right\n"));
        assert!(text.ends_with("    hemisphere tracking: true\n"));
    }

    #[test]
    fn test_format_no_buttons() {
        let mut sample = mock::sample(0, 0);
        sample.buttons = Buttons::empty();
        assert!(format_sample(0, &sample).contains("    buttons: 0 (none)\n"));
    }

    #[test]
    fn test_format_sample_line() {
        let line = format_sample_line(0, &mock::sample(0, 9));
        assert!(line.starts_with("c0 seq=9 "));
        assert!(line.contains("btn=0x020"));
    }
}
