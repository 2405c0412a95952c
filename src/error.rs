//! Error kinds raised by the request-composition core

use thiserror::Error;

/// Errors produced by tables, overlays and the transport boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Row or column outside the table. Unreachable through the key bindings.
    #[error("cell ({row}, {column}) is out of range")]
    OutOfRange { row: usize, column: usize },

    /// The cell editor was asked to open while no cell is selected
    #[error("no table cell is selected")]
    InvalidSelection,

    /// A method name that is not one of the enumerated methods
    #[error("method `{0}` not found")]
    NotFound(String),

    /// Network, DNS or timeout failure from the executor
    #[error("{0}")]
    Transport(String),
}

impl Error {
    /// Recoverable errors keep the session alive; the rest end it.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::OutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
