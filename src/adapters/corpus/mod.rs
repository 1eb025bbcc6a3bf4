//! Dam corpus adapters.

mod file_source;
mod static_source;

pub use file_source::FileDamSource;
pub use static_source::StaticDamSource;
