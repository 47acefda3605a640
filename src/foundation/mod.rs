//! Shared utilities: math types and logging setup

pub mod logging;
pub mod math;
