//! Recording fake of the Sixense SDK for unit tests.

use crate::ffi::SIXENSE_FAILURE;
use crate::sdk::Sdk;
use crate::types::{BaseColor, Buttons, ControllerSample, FilterParams, Hand};
use crate::{Result, SixenseError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Init,
    Exit,
    MaxBases,
    IsBaseConnected(usize),
    SetActiveBase(usize),
    MaxControllers,
    IsControllerEnabled(usize),
    Data(usize, usize),
    NewestData(usize),
    AllNewestData,
    Other(&'static str),
}

#[derive(Debug)]
pub struct MockState {
    pub calls: Vec<Call>,
    pub init_ok: bool,
    pub exit_ok: bool,
    pub set_active_base_ok: bool,
    pub max_bases: usize,
    pub connected_bases: Vec<usize>,
    /// Number of `is_base_connected` sweeps that report nothing before
    /// `connected_bases` becomes visible.
    pub bases_hidden_for_sweeps: usize,
    pub sweep_hidden: bool,
    pub max_controllers: usize,
    pub enabled_controllers: Vec<usize>,
    pub failing_controllers: Vec<usize>,
    pub history_size: usize,
    pub sequence: u8,
    pub filter_enabled: bool,
    pub filter_params: FilterParams,
    pub base_color: BaseColor,
}

impl Default for MockState {
    fn default() -> Self {
        MockState {
            calls: Vec::new(),
            init_ok: true,
            exit_ok: true,
            set_active_base_ok: true,
            max_bases: 4,
            connected_bases: vec![0],
            bases_hidden_for_sweeps: 0,
            sweep_hidden: false,
            max_controllers: 4,
            enabled_controllers: vec![0, 1],
            failing_controllers: Vec::new(),
            history_size: 10,
            sequence: 7,
            filter_enabled: true,
            filter_params: FilterParams {
                near_range: 500.0,
                near_val: 0.96,
                far_range: 1600.0,
                far_val: 0.99,
            },
            base_color: BaseColor {
                red: 0,
                green: 255,
                blue: 0,
            },
        }
    }
}

/// Cloneable handle; clones share state so a test can inspect calls after
/// handing the SDK to a session.
#[derive(Debug, Clone, Default)]
pub struct MockSdk {
    state: Arc<Mutex<MockState>>,
}

impl MockSdk {
    pub fn new(state: MockState) -> Self {
        MockSdk {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.state().calls.iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: Call) -> MutexGuard<'_, MockState> {
        let mut state = self.state();
        state.calls.push(call);
        state
    }

    fn push(&self, call: Call) {
        self.state().calls.push(call);
    }
}

pub fn sample(controller: usize, sequence: u8) -> ControllerSample {
    ControllerSample {
        position: [controller as f32 * 100.0, 50.0, -250.0],
        rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        quaternion: [0.0, 0.0, 0.0, 1.0],
        joystick: [0.0, 0.25],
        trigger: 0.5,
        buttons: Buttons::BUTTON_1,
        sequence_number: sequence,
        firmware_revision: 174,
        hardware_revision: 0,
        packet_type: 1,
        magnetic_frequency: 0,
        enabled: true,
        controller_index: controller as i32,
        docked: false,
        hand: if controller % 2 == 0 { Hand::Left } else { Hand::Right },
        hemi_tracking_enabled: true,
    }
}

fn failure(op: &'static str) -> SixenseError {
    SixenseError::Call {
        op,
        status: SIXENSE_FAILURE,
    }
}

impl Sdk for MockSdk {
    fn init(&self) -> Result<()> {
        if self.record(Call::Init).init_ok {
            Ok(())
        } else {
            Err(failure("sixenseInit"))
        }
    }

    fn exit(&self) -> Result<()> {
        if self.record(Call::Exit).exit_ok {
            Ok(())
        } else {
            Err(failure("sixenseExit"))
        }
    }

    fn max_bases(&self) -> usize {
        let mut state = self.record(Call::MaxBases);
        // Each enumeration sweep starts with `max_bases`.
        state.sweep_hidden = state.bases_hidden_for_sweeps > 0;
        if state.sweep_hidden {
            state.bases_hidden_for_sweeps -= 1;
        }
        state.max_bases
    }

    fn is_base_connected(&self, base: usize) -> bool {
        let state = self.record(Call::IsBaseConnected(base));
        !state.sweep_hidden && state.connected_bases.contains(&base)
    }

    fn set_active_base(&self, base: usize) -> Result<()> {
        if self.record(Call::SetActiveBase(base)).set_active_base_ok {
            Ok(())
        } else {
            Err(failure("sixenseSetActiveBase"))
        }
    }

    fn max_controllers(&self) -> usize {
        self.record(Call::MaxControllers).max_controllers
    }

    fn is_controller_enabled(&self, which: usize) -> bool {
        self.record(Call::IsControllerEnabled(which))
            .enabled_controllers
            .contains(&which)
    }

    fn num_active_controllers(&self) -> usize {
        self.record(Call::Other("num_active_controllers"))
            .enabled_controllers
            .len()
    }

    fn history_size(&self) -> usize {
        self.record(Call::Other("history_size")).history_size
    }

    fn data(&self, which: usize, index_back: usize) -> Result<ControllerSample> {
        let state = self.record(Call::Data(which, index_back));
        if state.failing_controllers.contains(&which) {
            return Err(failure("sixenseGetData"));
        }
        Ok(sample(which, state.sequence.wrapping_sub(index_back as u8)))
    }

    fn all_data(&self, index_back: usize) -> Result<Vec<ControllerSample>> {
        let state = self.record(Call::Other("all_data"));
        let sequence = state.sequence.wrapping_sub(index_back as u8);
        Ok(slots(&state, sequence))
    }

    fn newest_data(&self, which: usize) -> Result<ControllerSample> {
        let state = self.record(Call::NewestData(which));
        if state.failing_controllers.contains(&which) {
            return Err(failure("sixenseGetNewestData"));
        }
        Ok(sample(which, state.sequence))
    }

    fn all_newest_data(&self) -> Result<Vec<ControllerSample>> {
        let state = self.record(Call::AllNewestData);
        Ok(slots(&state, state.sequence))
    }

    fn hemisphere_tracking_mode(&self, _which: usize) -> Result<bool> {
        self.push(Call::Other("hemisphere_tracking_mode"));
        Ok(true)
    }

    fn set_hemisphere_tracking_mode(&self, _which: usize, _enabled: bool) -> Result<()> {
        self.push(Call::Other("set_hemisphere_tracking_mode"));
        Ok(())
    }

    fn auto_enable_hemisphere_tracking(&self, _which: usize) -> Result<()> {
        self.push(Call::Other("auto_enable_hemisphere_tracking"));
        Ok(())
    }

    fn high_priority_binding_enabled(&self) -> Result<bool> {
        self.push(Call::Other("high_priority_binding_enabled"));
        Ok(false)
    }

    fn set_high_priority_binding_enabled(&self, _enabled: bool) -> Result<()> {
        self.push(Call::Other("set_high_priority_binding_enabled"));
        Ok(())
    }

    fn trigger_vibration(&self, _which: usize, _duration: Duration, _pattern: u8) -> Result<()> {
        self.push(Call::Other("trigger_vibration"));
        Err(failure("sixenseTriggerVibration"))
    }

    fn filter_enabled(&self) -> Result<bool> {
        Ok(self.record(Call::Other("filter_enabled")).filter_enabled)
    }

    fn set_filter_enabled(&self, enabled: bool) -> Result<()> {
        self.record(Call::Other("set_filter_enabled")).filter_enabled = enabled;
        Ok(())
    }

    fn filter_params(&self) -> Result<FilterParams> {
        Ok(self.record(Call::Other("filter_params")).filter_params)
    }

    fn set_filter_params(&self, params: FilterParams) -> Result<()> {
        self.record(Call::Other("set_filter_params")).filter_params = params;
        Ok(())
    }

    fn base_color(&self) -> Result<BaseColor> {
        Ok(self.record(Call::Other("base_color")).base_color)
    }

    fn set_base_color(&self, color: BaseColor) -> Result<()> {
        self.record(Call::Other("set_base_color")).base_color = color;
        Ok(())
    }
}

fn slots(state: &MockState, sequence: u8) -> Vec<ControllerSample> {
    (0..crate::ffi::SIXENSE_MAX_CONTROLLERS)
        .map(|i| ControllerSample {
            enabled: state.enabled_controllers.contains(&i),
            ..sample(i, sequence)
        })
        .collect()
}
