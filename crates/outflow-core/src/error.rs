//! Error types for Outflow

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unrecognized frequency: {0}")]
    UnrecognizedFrequency(String),
}

pub type Result<T> = std::result::Result<T, Error>;
