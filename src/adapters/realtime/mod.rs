//! Realtime status adapters.

mod simulated;

pub use simulated::SimulatedRealtimeProvider;
