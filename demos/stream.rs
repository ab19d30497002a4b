//! Stream controller samples to stdout as they arrive.
//!
//! Usage: cargo run --example stream
//! Press Ctrl+C to stop. Each enabled controller gets a short vibration
//! pulse on start where the hardware supports it; holding START prints
//! every sample instead of every 30th.

use sixense::{discovery, report, Buttons, Config, NativeSdk, SampleStream, Sdk, Session};
use std::time::{Duration, Instant};

fn main() {
    env_logger::init();

    let config = Config::from_env();
    let sdk = match NativeSdk::load(config.library.as_deref()) {
        Ok(sdk) => sdk,
        Err(e) => {
            eprintln!("Failed to load Sixense SDK: {}", e);
            std::process::exit(1);
        }
    };

    let session = match Session::open(sdk) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to start SDK: {}", e);
            std::process::exit(1);
        }
    };

    let bases = discovery::await_bases(&session, &config.discovery);
    let Some(base) = config.base.choose(&bases) else {
        eprintln!("No connected bases found!");
        drop(session);
        std::process::exit(2);
    };
    if let Err(e) = session.activate_base(base) {
        log::warn!("Activating base {} failed: {}", base, e);
    }
    for controller in session.enabled_controllers() {
        if let Err(e) = session.sdk().trigger_vibration(controller, Duration::from_millis(200), 0) {
            log::debug!("No vibration on controller {}: {}", controller, e);
        }
    }

    let stream = match SampleStream::start(session, Duration::from_millis(16)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to start stream: {}", e);
            std::process::exit(1);
        }
    };

    println!("Streaming base {} (Ctrl+C to stop)...", base);

    let start = Instant::now();
    let mut count: u64 = 0;
    let mut idle_timeouts: u32 = 0;
    let mut last_report = Instant::now();

    loop {
        match stream.next_timeout(Duration::from_secs(2)) {
            Ok(event) => {
                idle_timeouts = 0;
                count += 1;
                let s = &event.sample;
                if s.is_pressed(Buttons::START) || count % 30 == 1 {
                    println!("{}", report::format_sample_line(event.controller, s));
                }

                let now = Instant::now();
                if now.duration_since(last_report) >= Duration::from_secs(3) {
                    let elapsed = start.elapsed().as_secs_f64();
                    println!(
                        "--- {} samples in {:.1}s ({:.1} Hz) ---",
                        count,
                        elapsed,
                        count as f64 / elapsed
                    );
                    last_report = now;
                }
            }
            Err(sixense::SixenseError::Timeout) => {
                idle_timeouts += 1;
                eprintln!("No new samples for 2s (timeout #{})", idle_timeouts);
                if idle_timeouts >= 15 {
                    eprintln!("Stopping after 30s without samples");
                    break;
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    if let Err(e) = stream.stop() {
        eprintln!("Shutdown failed: {}", e);
        std::process::exit(1);
    }
}
