//! Core business logic
//!
//! The synchronization pipeline: record fetching, field normalization,
//! payload assembly, and batch orchestration.

pub mod fetch;
pub mod normalize;
pub mod payload;
pub mod sync;
