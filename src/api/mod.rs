//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod donations;
mod stats;

pub use donations::*;
pub use stats::*;
