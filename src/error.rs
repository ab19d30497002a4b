/// Errors that can occur when talking to the Sixense SDK.
#[derive(Debug, thiserror::Error)]
pub enum SixenseError {
    #[error("Sixense library not found (tried: {0})")]
    LibraryNotFound(String),

    #[error("Failed to load Sixense library: {0}")]
    Load(#[from] libloading::Error),

    #[error("Symbol `{name}` missing from Sixense library")]
    MissingSymbol {
        name: String,
        #[source]
        source: libloading::Error,
    },

    #[error("SDK initialization failed")]
    InitFailed,

    #[error("SDK shutdown failed")]
    ShutdownFailed,

    #[error("{op} failed with status {status}")]
    Call { op: &'static str, status: i32 },

    #[error("Base index {index} out of range (max {max})")]
    BaseOutOfRange { index: usize, max: usize },

    #[error("Controller index {index} out of range (max {max})")]
    ControllerOutOfRange { index: usize, max: usize },

    #[error("Controller {0} is not enabled")]
    ControllerDisabled(usize),

    #[error("History index {index} out of range (history size {size})")]
    HistoryOutOfRange { index: usize, size: usize },

    #[error("Sample stream stopped")]
    StreamStopped,

    #[error("Timeout waiting for data")]
    Timeout,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
