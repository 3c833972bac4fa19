//! Motif Core Types and Definitions
//!
//! This crate provides the building blocks of the Motif pattern generator:
//!
//! - **Sampling**: Seedable uniform sampling ([`sampler::RandomSampler`])
//! - **Parameters**: Randomised shape parameters ([`params::ShapeConfig`])
//! - **Shapes**: Circles and rectangles with fill styling ([`shape`] module)
//! - **Geometry**: Points and sizes ([`geometry`] module)
//! - **Document**: Indentation-aware markup emission ([`document`] module)

pub mod document;
pub mod geometry;
pub mod params;
pub mod sampler;
pub mod shape;
