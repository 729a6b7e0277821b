//! Outbound adapters implementing domain ports for infrastructure concerns.
//!
//! Adapters translate between domain types and their backing storage and
//! contain no request-handling logic.

pub mod persistence;
