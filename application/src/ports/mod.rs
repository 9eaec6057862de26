//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that outer layers implement. Generation
//! backends implement the domain's `Generator` trait directly.

pub mod progress;
