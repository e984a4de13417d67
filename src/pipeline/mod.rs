//! Pipeline module - loading, scoring and selection steps

pub mod chi2;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod matrix;
pub mod select;
pub mod target;

pub use chi2::*;
pub use dataset::*;
pub use error::ChiSquareError;
pub use loader::*;
pub use matrix::*;
pub use select::*;
pub use target::*;
