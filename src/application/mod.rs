//! Application layer
//!
//! Use cases that orchestrate the domain to implement one form submission
//! each: validate, run a single SQL mutation through a port, apply the
//! post-mutation effects.

pub mod auth;
pub mod invoice;
