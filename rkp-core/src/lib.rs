//! rkpower Core Library
//!
//! Translates platform power hints into writes on kernel control files for an
//! RK312x SoC: CPU cluster frequency range and governor, secondary core
//! hotplug, GPU clock and DVFS enable, and the DDR state switch.
//!
//! # Module Structure
//!
//! - `hw/` - Control file access (write primitive, frequency table discovery)
//! - `data/` - Typed control values and configuration
//! - `engine/` - Controller, boost actions, hint dispatch, interactive state
//!
//! # Example
//!
//! ```no_run
//! use rkp_core::{HintEvent, HintKind, PowerConfig, PowerController, SysfsWriter};
//!
//! let controller = PowerController::init(PowerConfig::default(), SysfsWriter);
//! controller.hint(&HintEvent::new(HintKind::Interaction, Some(1)));
//! controller.set_interactive(false);
//! ```

// Grouped modules
pub mod data;
pub mod engine;
pub mod hw;

// Standalone modules
pub mod constants;
pub mod error;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use data::{
    ControlPaths, ControlValue, CoreState, CpuGovernor, DdrPriority, Frequency, GpuClock,
    GpuDvfs, InteractiveCeiling, PowerConfig,
};
pub use engine::{dispatch, BoostAction, FrequencyTables, HintEvent, HintKind, PowerController};
pub use error::{PowerError, Result};
pub use hw::{
    load_frequency_table, try_load_frequency_table, try_write_control, write_control, write_to,
    ControlWriter, FreqDomain, FrequencyTable, SysfsWriter,
};
