//! # sixense - Rust bindings for the Sixense motion controller SDK
//!
//! Drives Razer Hydra / STEM hardware through the vendor's native library,
//! loaded at runtime. Provides:
//! - A scoped `Session` that pairs SDK init with exactly one shutdown
//! - Base station discovery with bounded backoff
//! - Typed controller samples (pose, joystick, trigger, buttons)
//! - Background streaming of new samples
//!
//! ## Quick Start
//! ```no_run
//! use sixense::{NativeSdk, Session};
//!
//! let sdk = NativeSdk::load(None).unwrap();
//! let session = Session::open(sdk).unwrap();
//! let bases = sixense::discovery::await_bases(&session, &Default::default());
//! if let Some(&base) = bases.first() {
//!     session.activate_base(base).unwrap();
//!     for controller in session.enabled_controllers() {
//!         let sample = session.newest_sample(controller).unwrap();
//!         println!("{}: pos {:?}", controller, sample.position);
//!     }
//! }
//! session.close().unwrap();
//! ```

pub mod error;
pub mod ffi;
pub mod types;
pub mod convert;
pub mod sdk;
pub mod native;
pub mod session;
pub mod discovery;
pub mod report;
pub mod stream;
pub mod config;
pub mod driver;

#[cfg(test)]
mod mock;

pub use error::SixenseError;
pub use types::*;
pub use sdk::Sdk;
pub use native::NativeSdk;
pub use session::Session;
pub use stream::{SampleStream, StreamSample};
pub use config::{BaseSelection, Config};
pub use driver::{DriverConfig, Outcome};

/// Result type alias for Sixense operations.
pub type Result<T> = std::result::Result<T, SixenseError>;
