//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DamSource` - Reads the pre-scored dam corpus
//! - `RealtimeStatusProvider` - Optional live reservoir readings for dam details

mod dam_source;
mod realtime_status;

pub use dam_source::{CorpusError, DamSource};
pub use realtime_status::{RealtimeStatus, RealtimeStatusProvider};
