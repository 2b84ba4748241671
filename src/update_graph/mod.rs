//! Update-graph core: value objects, discovery services and the risk policy.
//!
//! Nothing in here performs I/O; graphs arrive through the
//! [`GraphSource`](crate::ports::outbound::GraphSource) port.

pub mod domain;
pub mod policies;
pub mod services;
