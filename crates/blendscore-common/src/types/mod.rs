//! Core data types for BlendScore

pub mod factor;
pub mod grade;
pub mod report;
pub mod snapshot;
pub mod terms;
