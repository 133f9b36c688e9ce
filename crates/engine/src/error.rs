//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidSplit`] thrown when a split request cannot be allocated.
//! - [`InvalidAmount`] thrown when an expense total is not usable.
//!
//!  [`InvalidSplit`]: EngineError::InvalidSplit
//!  [`InvalidAmount`]: EngineError::InvalidAmount
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid split: {0}")]
    InvalidSplit(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
