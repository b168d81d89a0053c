//! Shared primitives for the todo service: identifier and timestamp aliases
//! plus the domain error raised by the service layer.

pub mod error;
pub mod types;
