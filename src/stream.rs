use crate::sdk::Sdk;
use crate::session::Session;
use crate::types::ControllerSample;
use crate::{Result, SixenseError};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TrySendError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

const SAMPLE_QUEUE: usize = 256;

/// A new sample from one controller slot.
#[derive(Debug, Clone, Copy)]
pub struct StreamSample {
    pub controller: usize,
    /// Seconds since the stream started, taken when the sample was read.
    pub host_timestamp_s: f64,
    pub sample: ControllerSample,
}

/// Handle to a background poll of the SDK's newest data.
///
/// The poll thread owns the session and shuts the SDK down when it exits.
/// Only samples with a new sequence number are forwarded.
pub struct SampleStream {
    samples: Receiver<StreamSample>,
    /// Dropping this sender wakes the poll thread and ends it.
    stop_tx: Option<Sender<()>>,
    poller: Option<JoinHandle<Result<()>>>,
}

impl SampleStream {
    /// Start polling every `interval` (the hardware updates at 60 Hz).
    pub fn start<S>(session: Session<S>, interval: Duration) -> Result<SampleStream>
    where
        S: Sdk + Send + 'static,
    {
        let (sample_tx, samples) = crossbeam_channel::bounded(SAMPLE_QUEUE);
        let (stop_tx, stop_rx) = crossbeam_channel::bounded(0);

        let poller = std::thread::Builder::new()
            .name("sixense-poll".into())
            .spawn(move || poll(session, interval, &sample_tx, &stop_rx))?;

        Ok(SampleStream {
            samples,
            stop_tx: Some(stop_tx),
            poller: Some(poller),
        })
    }

    /// Wait up to `timeout` for the next new sample.
    pub fn next_timeout(&self, timeout: Duration) -> Result<StreamSample> {
        match self.samples.recv_timeout(timeout) {
            Ok(sample) => Ok(sample),
            Err(RecvTimeoutError::Timeout) => Err(SixenseError::Timeout),
            Err(RecvTimeoutError::Disconnected) => Err(SixenseError::StreamStopped),
        }
    }

    /// The next queued sample, if one is waiting.
    pub fn try_next(&self) -> Option<StreamSample> {
        self.samples.try_recv().ok()
    }

    pub fn is_running(&self) -> bool {
        self.poller.as_ref().is_some_and(|p| !p.is_finished())
    }

    /// Stop polling and return the status of the SDK shutdown.
    pub fn stop(mut self) -> Result<()> {
        self.join()
    }

    fn join(&mut self) -> Result<()> {
        drop(self.stop_tx.take());
        match self.poller.take() {
            Some(poller) => poller.join().unwrap_or(Err(SixenseError::StreamStopped)),
            None => Ok(()),
        }
    }
}

impl Drop for SampleStream {
    fn drop(&mut self) {
        if let Err(e) = self.join() {
            log::error!("Sixense poll ended with error: {}", e);
        }
    }
}

fn poll<S: Sdk>(
    session: Session<S>,
    interval: Duration,
    sample_tx: &Sender<StreamSample>,
    stop_rx: &Receiver<()>,
) -> Result<()> {
    let epoch = Instant::now();
    let mut last_sequence: Vec<Option<u8>> = Vec::new();

    log::info!("Sixense poll started ({:?} interval)", interval);

    loop {
        match session.all_newest_samples() {
            Ok(samples) => {
                let host_timestamp_s = epoch.elapsed().as_secs_f64();
                if !forward(samples, host_timestamp_s, &mut last_sequence, sample_tx) {
                    log::info!("Sample receiver gone, stopping poll");
                    break;
                }
            }
            Err(e) => log::warn!("Sixense poll error: {}", e),
        }

        if !matches!(stop_rx.recv_timeout(interval), Err(RecvTimeoutError::Timeout)) {
            log::info!("Sixense poll stopping");
            break;
        }
    }

    session.close()
}

/// Send every enabled slot whose sequence number moved. Returns `false` once
/// the receiving side is gone.
fn forward(
    samples: Vec<ControllerSample>,
    host_timestamp_s: f64,
    last_sequence: &mut Vec<Option<u8>>,
    sample_tx: &Sender<StreamSample>,
) -> bool {
    if last_sequence.len() < samples.len() {
        last_sequence.resize(samples.len(), None);
    }

    for (controller, sample) in samples.into_iter().enumerate() {
        let seen = &mut last_sequence[controller];
        if !sample.enabled {
            *seen = None;
            continue;
        }
        if seen.replace(sample.sequence_number) == Some(sample.sequence_number) {
            continue;
        }

        let event = StreamSample {
            controller,
            host_timestamp_s,
            sample,
        };
        match sample_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => log::trace!("Sample queue full, dropping sample"),
            Err(TrySendError::Disconnected(_)) => return false,
        }
    }
    true
}
