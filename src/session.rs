use crate::sdk::Sdk;
use crate::types::ControllerSample;
use crate::{Result, SixenseError};

/// An initialized SDK session.
///
/// `open` calls `init`; the session then owns the SDK's process-wide state
/// until it is released. Release calls `exit` exactly once: through `close`
/// when the caller wants to see the status, otherwise on drop.
pub struct Session<S: Sdk> {
    sdk: S,
    open: bool,
}

impl<S: Sdk> Session<S> {
    /// Initialize the SDK. On failure nothing else is called and no
    /// shutdown is attempted.
    pub fn open(sdk: S) -> Result<Session<S>> {
        if let Err(e) = sdk.init() {
            log::error!("Sixense init failed: {}", e);
            return Err(SixenseError::InitFailed);
        }
        log::info!("Sixense session opened");
        Ok(Session { sdk, open: true })
    }

    /// Access the underlying SDK for calls the session does not wrap.
    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    /// Indices of all currently connected base stations, ascending.
    pub fn connected_bases(&self) -> Vec<usize> {
        (0..self.sdk.max_bases())
            .filter(|&i| self.sdk.is_base_connected(i))
            .collect()
    }

    /// Make `base` the active base for all following controller queries.
    pub fn activate_base(&self, base: usize) -> Result<()> {
        let max = self.sdk.max_bases();
        if base >= max {
            return Err(SixenseError::BaseOutOfRange { index: base, max });
        }
        self.sdk.set_active_base(base)?;
        log::info!("Active base: {}", base);
        Ok(())
    }

    /// Indices of the enabled controllers on the active base, ascending.
    pub fn enabled_controllers(&self) -> Vec<usize> {
        (0..self.sdk.max_controllers())
            .filter(|&i| self.sdk.is_controller_enabled(i))
            .collect()
    }

    /// Newest sample of an enabled controller.
    pub fn newest_sample(&self, which: usize) -> Result<ControllerSample> {
        self.check_controller(which)?;
        self.sdk.newest_data(which)
    }

    /// Sample from `index_back` polls ago of an enabled controller.
    pub fn sample(&self, which: usize, index_back: usize) -> Result<ControllerSample> {
        let size = self.sdk.history_size();
        if index_back >= size {
            return Err(SixenseError::HistoryOutOfRange {
                index: index_back,
                size,
            });
        }
        self.check_controller(which)?;
        self.sdk.data(which, index_back)
    }

    /// Newest sample of every controller slot, enabled or not.
    pub fn all_newest_samples(&self) -> Result<Vec<ControllerSample>> {
        self.sdk.all_newest_data()
    }

    fn check_controller(&self, which: usize) -> Result<()> {
        let max = self.sdk.max_controllers();
        if which >= max {
            return Err(SixenseError::ControllerOutOfRange { index: which, max });
        }
        if !self.sdk.is_controller_enabled(which) {
            return Err(SixenseError::ControllerDisabled(which));
        }
        Ok(())
    }

    /// Shut the SDK down and report whether that succeeded.
    pub fn close(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        match self.sdk.exit() {
            Ok(()) => {
                log::info!("Sixense session closed");
                Ok(())
            }
            Err(e) => {
                log::error!("Sixense exit failed: {}", e);
                Err(SixenseError::ShutdownFailed)
            }
        }
    }
}

impl<S: Sdk> Drop for Session<S> {
    fn drop(&mut self) {
        // Errors were already logged by `shutdown`.
        let _ = self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockSdk, MockState};

    #[test]
    fn test_init_failure_calls_nothing_else() {
        let sdk = MockSdk::new(MockState {
            init_ok: false,
            ..Default::default()
        });
        let result = Session::open(sdk.clone());
        assert!(matches!(result, Err(SixenseError::InitFailed)));
        assert_eq!(sdk.calls(), vec![Call::Init]);
    }

    #[test]
    fn test_drop_shuts_down_once() {
        let sdk = MockSdk::default();
        {
            let _session = Session::open(sdk.clone()).unwrap();
        }
        assert_eq!(sdk.count(Call::Exit), 1);
    }

    #[test]
    fn test_close_does_not_shut_down_twice() {
        let sdk = MockSdk::default();
        let session = Session::open(sdk.clone()).unwrap();
        session.close().unwrap();
        assert_eq!(sdk.count(Call::Exit), 1);
    }

    #[test]
    fn test_close_reports_shutdown_failure() {
        let sdk = MockSdk::new(MockState {
            exit_ok: false,
            ..Default::default()
        });
        let session = Session::open(sdk.clone()).unwrap();
        assert!(matches!(session.close(), Err(SixenseError::ShutdownFailed)));
        assert_eq!(sdk.count(Call::Exit), 1);
    }

    #[test]
    fn test_connected_bases_filters_by_connectivity() {
        let sdk = MockSdk::new(MockState {
            connected_bases: vec![1, 3],
            ..Default::default()
        });
        let session = Session::open(sdk.clone()).unwrap();
        assert_eq!(session.connected_bases(), vec![1, 3]);
        assert_eq!(sdk.count(Call::IsBaseConnected(0)), 1);
        assert_eq!(sdk.count(Call::IsBaseConnected(4)), 0);
    }

    #[test]
    fn test_activate_base_out_of_range() {
        let sdk = MockSdk::default();
        let session = Session::open(sdk.clone()).unwrap();
        assert!(matches!(
            session.activate_base(4),
            Err(SixenseError::BaseOutOfRange { index: 4, max: 4 })
        ));
        assert_eq!(sdk.count(Call::SetActiveBase(4)), 0);
        session.activate_base(2).unwrap();
        assert_eq!(sdk.count(Call::SetActiveBase(2)), 1);
    }

    #[test]
    fn test_newest_sample_checks_controller() {
        let sdk = MockSdk::new(MockState {
            enabled_controllers: vec![1],
            ..Default::default()
        });
        let session = Session::open(sdk.clone()).unwrap();

        assert!(matches!(
            session.newest_sample(0),
            Err(SixenseError::ControllerDisabled(0))
        ));
        assert!(matches!(
            session.newest_sample(9),
            Err(SixenseError::ControllerOutOfRange { index: 9, max: 4 })
        ));
        assert_eq!(session.newest_sample(1).unwrap().controller_index, 1);
        assert_eq!(sdk.count(Call::NewestData(0)), 0);
        assert_eq!(sdk.count(Call::NewestData(9)), 0);
    }

    #[test]
    fn test_history_sample() {
        let sdk = MockSdk::default();
        let session = Session::open(sdk.clone()).unwrap();

        let sample = session.sample(0, 2).unwrap();
        assert_eq!(sample.sequence_number, 5);
        assert!(matches!(
            session.sample(0, 10),
            Err(SixenseError::HistoryOutOfRange { index: 10, size: 10 })
        ));
        assert_eq!(sdk.count(Call::Data(0, 10)), 0);
    }
}
