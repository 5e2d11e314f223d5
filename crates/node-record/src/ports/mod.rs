//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Outbound (Driven)**: the signing strategy injected into record builds

pub mod outbound;
