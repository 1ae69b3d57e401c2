//! Data types and configuration
//!
//! Typed control values and the control path layout.

mod config;
mod types;

pub use config::{ControlPaths, PowerConfig};
pub use types::{
    ControlValue, CoreState, CpuGovernor, DdrPriority, Frequency, GpuClock, GpuDvfs,
    InteractiveCeiling,
};
