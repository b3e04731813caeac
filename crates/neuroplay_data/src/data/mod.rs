//! Core data structures for the Neuroplay engines.

pub mod dataset;
pub mod living;
pub mod network;
