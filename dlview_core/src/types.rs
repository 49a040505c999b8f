use serde::{Deserialize, Serialize};

/// State of the current transfer as reported by the transfer engine.
///
/// This crate never transitions the state itself — it renders whatever
/// state the engine says it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferState {
    Ready,
    Downloading,
    Complete,
    Error,
}

/// Raw transfer metrics for one progress tick. Recomputed by the engine
/// every tick; treated here as a transient value, never stored.
///
/// Both fields are 64-bit so multi-gigabyte transfers cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferMetrics {
    pub bytes_received: u64,
    pub bytes_per_second: u64,
}

impl TransferMetrics {
    pub fn new(bytes_received: u64, bytes_per_second: u64) -> Self {
        Self {
            bytes_received,
            bytes_per_second,
        }
    }
}

/// One message on the progress channel: the state the engine is in plus
/// the metrics snapshot that goes with it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransferTick {
    pub state: TransferState,
    pub metrics: TransferMetrics,
}

impl TransferTick {
    pub fn new(state: TransferState, metrics: TransferMetrics) -> Self {
        Self { state, metrics }
    }
}
