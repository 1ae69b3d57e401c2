//! Boost actions
//!
//! Each action turns one intent into a fixed, ordered series of control
//! writes. None of them read back or confirm what the kernel accepted.

use tracing::{debug, warn};

use crate::data::{CpuGovernor, DdrPriority, GpuClock, GpuDvfs};
use crate::engine::controller::PowerController;
use crate::hw::ControlWriter;

impl<W: ControlWriter> PowerController<W> {
    /// Clamp the cluster 0 scaling range to two discovered operating points.
    ///
    /// An index outside the table, or a slot that is not a number, skips
    /// that bound only.
    pub fn cpu_cluster_boost(&self, max_index: usize, min_index: usize) {
        let table = &self.tables().cpu_cluster0;
        debug!(
            "cpu_cluster_boost: freq[{}]={:?} freq[{}]={:?}",
            max_index,
            table.get(max_index),
            min_index,
            table.get(min_index)
        );

        match table.frequency(max_index) {
            Ok(freq) => self.write(&self.paths().cpu_max_freq, &freq),
            Err(e) => warn!("{} (max)", e),
        }
        match table.frequency(min_index) {
            Ok(freq) => self.write(&self.paths().cpu_min_freq, &freq),
            Err(e) => warn!("{} (min)", e),
        }
    }

    /// Pin the GPU at 480 MHz with DVFS off.
    ///
    /// The indices are only logged; the platform pins a fixed clock rather
    /// than selecting from the discovered table.
    pub fn gpu_boost(&self, max_index: usize, min_index: usize) {
        let table = &self.tables().gpu;
        debug!(
            "gpu_boost: freq[{}]={:?} freq[{}]={:?}",
            max_index,
            table.get(max_index),
            min_index,
            table.get(min_index)
        );

        self.write(&self.paths().gpu_dvfs_enable, &GpuDvfs::Disabled);
        self.write(&self.paths().gpu_clock, &GpuClock::Boost);
    }

    /// Raise or lower DDR priority for touch interaction.
    ///
    /// Uses the same tokens as performance mode: `"p"` on, `"n"` off. The
    /// vendor HAL wrote the inverse for touch; do not restore it, INTERACTION
    /// with a non-zero payload must raise.
    pub fn touch_boost(&self, enable: bool) {
        debug!("touch_boost: {}", enable);
        self.write(&self.paths().ddr_state, &DdrPriority::from_enabled(enable));
    }

    /// Enter or leave performance mode.
    ///
    /// Writes, in order: CPU governor, GPU DVFS switch, GPU clock, DDR state.
    pub fn performance_mode(&self, enable: bool) {
        debug!("performance_mode: {}", enable);
        let paths = self.paths();
        if enable {
            self.write(&paths.cpu_governor, &CpuGovernor::Performance);
            self.write(&paths.gpu_dvfs_enable, &GpuDvfs::Disabled);
            self.write(&paths.gpu_clock, &GpuClock::Boost);
            self.write(&paths.ddr_state, &DdrPriority::Raise);
        } else {
            self.write(&paths.cpu_governor, &CpuGovernor::Interactive);
            self.write(&paths.gpu_dvfs_enable, &GpuDvfs::Enabled);
            self.write(&paths.gpu_clock, &GpuClock::Default);
            self.write(&paths.ddr_state, &DdrPriority::Lower);
        }
    }

    /// Switch the CPU governor to powersave, or back to interactive.
    ///
    /// Not reachable from any hint; LOW_POWER is dispatched as a no-op.
    pub fn low_power_mode(&self, enable: bool) {
        debug!("low_power_mode: {}", enable);
        let governor = if enable { CpuGovernor::Powersave } else { CpuGovernor::Interactive };
        self.write(&self.paths().cpu_governor, &governor);
    }
}
