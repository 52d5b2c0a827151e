//! Application layer: service orchestration over the domain traits.

pub mod services;
