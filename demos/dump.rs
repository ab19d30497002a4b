//! Print the newest sample of every enabled controller once.
//!
//! Usage: cargo run --example dump
//! Set SIXENSE_LIBRARY to point at the vendor library if it is not on the
//! loader path. Exits with status 2 when no base station is connected.

use sixense::{driver, Config, DriverConfig, NativeSdk, Outcome};

const EXIT_NO_BASES: i32 = 2;

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

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match driver::run(sdk, &DriverConfig::from(&config), &mut out) {
        Ok(Outcome::Completed { .. }) => {}
        Ok(Outcome::NoBases) => std::process::exit(EXIT_NO_BASES),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
