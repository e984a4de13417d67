//! Report module - score blocks, summaries and export

pub mod export;
pub mod scores;
pub mod summary;

pub use export::*;
pub use scores::*;
pub use summary::*;
