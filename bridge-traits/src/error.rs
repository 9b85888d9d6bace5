use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Module entry point not available: {0}")]
    NotAvailable(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("Boundary allocation of {size} bytes failed")]
    AllocationFailed { size: usize },

    #[error("Transfer of '{filename}' rejected: {length} bytes exceeds the {limit} byte limit")]
    TransferTooLarge {
        filename: String,
        length: usize,
        limit: usize,
    },

    #[error("Failed to read dropped file '{filename}': {message}")]
    FileRead { filename: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
