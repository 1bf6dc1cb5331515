//! Shared wire-format definitions for the Taskpad REST contract.

pub mod task;
pub mod wire;
