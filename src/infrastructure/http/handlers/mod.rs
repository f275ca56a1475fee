//! HTTP Handlers

mod fallback;
mod posts;

pub use fallback::*;
pub use posts::*;
