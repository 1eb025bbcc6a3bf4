//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `corpus` - Dam corpus sources (file, in-memory)
//! - `realtime` - Realtime reservoir readings (simulated)
//! - `http` - REST API

pub mod corpus;
pub mod http;
pub mod realtime;

pub use corpus::{FileDamSource, StaticDamSource};
pub use http::{app_router, with_middleware, DiagnosisAppState};
pub use realtime::SimulatedRealtimeProvider;
