//! Hardware interaction modules
//!
//! The write primitive is the only place that touches control files for
//! writing; frequency discovery is the only reader.

mod control;
mod freq_table;

pub use control::{try_write_control, write_control, write_to, ControlWriter, SysfsWriter};
#[cfg(test)]
pub use control::MockControlWriter;
pub use freq_table::{
    load_frequency_table, try_load_frequency_table, FreqDomain, FrequencyTable,
};
