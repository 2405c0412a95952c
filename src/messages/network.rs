//! Network messages - communication between App and Network layers

use crate::models::RequestDescriptor;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Execute a composed request
    Execute {
        id: u64,
        request: RequestDescriptor,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResponse {
    /// The server answered
    Success {
        id: u64,
        status: u16,
        body: String,
        time_ms: u64,
    },
    /// Transport failure: connect, DNS, timeout, or an unreadable body
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Success { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }
}
