//! Data models for the donation tracker application.
//!
//! These models match the public JSON contract of the API exactly.

mod donation;

pub use donation::*;
