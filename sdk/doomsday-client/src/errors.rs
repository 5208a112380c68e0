use anchor_lang::prelude::Pubkey;
use thiserror::Error;

/// Failures while decoding fixed-layout account data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Truncated account: needed {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },
    #[error("Invalid bool byte {value} at offset {offset}")]
    InvalidBool { offset: usize, value: u8 },
    #[error("Invalid {field} tag {value}")]
    InvalidTag { field: &'static str, value: u8 },
    #[error("{field} length {len} exceeds capacity {capacity}")]
    TextTooLong {
        field: &'static str,
        len: usize,
        capacity: usize,
    },
    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },
    #[error("Event outcome does not agree with event status")]
    InconsistentOutcome,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("RPC error: {0}")]
    Rpc(#[from] Box<solana_client::client_error::ClientError>),
    #[error("Bump mismatch: expected {expected}, stored bump derives {derived:?}")]
    BumpMismatch {
        expected: Pubkey,
        derived: Option<Pubkey>,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<solana_client::client_error::ClientError> for ClientError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        ClientError::Rpc(Box::new(err))
    }
}

impl ClientError {
    /// Transport failures may succeed on retry; everything else will not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Rpc(_))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
