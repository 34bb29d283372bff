//! Error type shared by the board core.

use thiserror::Error;

use crate::board::ItemId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoardError {
    /// A setter or command constructor was handed a value it cannot apply
    /// (non-positive scale, non-finite angle, mismatched factor list, ...)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The board never allocated an item with this id
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
