//! Power controller
//!
//! Owns the control paths, the discovered frequency tables and the write
//! sink. Built once at module load; every entry point takes `&self`, so a
//! shared controller can serve hints from several threads. Writes from
//! overlapping calls are independent and may interleave.

use std::path::Path;

use tracing::{debug, info};

use crate::data::{ControlPaths, ControlValue, PowerConfig};
use crate::engine::hint::{dispatch, BoostAction, HintEvent};
use crate::hw::{load_frequency_table, ControlWriter, FreqDomain, FrequencyTable, SysfsWriter};

/// Frequency tables discovered at init, read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTables {
    pub cpu_cluster0: FrequencyTable,
    pub gpu: FrequencyTable,
}

impl FrequencyTables {
    pub fn empty() -> Self {
        Self {
            cpu_cluster0: FrequencyTable::empty(FreqDomain::CpuCluster0),
            gpu: FrequencyTable::empty(FreqDomain::Gpu),
        }
    }

    /// Read both frequency sources; failures leave the table empty
    pub fn discover(paths: &ControlPaths) -> Self {
        Self {
            cpu_cluster0: load_frequency_table(FreqDomain::CpuCluster0, &paths.cpu_available_freqs),
            gpu: load_frequency_table(FreqDomain::Gpu, &paths.gpu_available_freqs),
        }
    }
}

pub struct PowerController<W: ControlWriter = SysfsWriter> {
    paths: ControlPaths,
    tables: FrequencyTables,
    writer: W,
}

impl<W: ControlWriter> PowerController<W> {
    /// Discover frequency tables and take ownership of the writer
    pub fn init(config: PowerConfig, writer: W) -> Self {
        let tables = FrequencyTables::discover(&config.paths);
        info!(
            "Discovered {} cpu_clust0 and {} gpu frequencies",
            tables.cpu_cluster0.len(),
            tables.gpu.len()
        );
        Self::with_tables(config.paths, tables, writer)
    }

    pub fn with_tables(paths: ControlPaths, tables: FrequencyTables, writer: W) -> Self {
        Self {
            paths,
            tables,
            writer,
        }
    }

    pub fn paths(&self) -> &ControlPaths {
        &self.paths
    }

    pub fn tables(&self) -> &FrequencyTables {
        &self.tables
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Run one boost action
    pub fn apply(&self, action: BoostAction) {
        match action {
            BoostAction::CpuClusterBoost {
                max_index,
                min_index,
            } => self.cpu_cluster_boost(max_index, min_index),
            BoostAction::GpuBoost {
                max_index,
                min_index,
            } => self.gpu_boost(max_index, min_index),
            BoostAction::TouchBoost(enable) => self.touch_boost(enable),
            BoostAction::PerformanceMode(enable) => self.performance_mode(enable),
            BoostAction::LowPowerMode(enable) => self.low_power_mode(enable),
        }
    }

    /// Dispatch a hint and apply the resulting action, if any
    pub fn hint(&self, event: &HintEvent) {
        match dispatch(event) {
            Some(action) => {
                debug!(
                    "hint {} payload {:?} -> {:?}",
                    event.kind, event.payload, action
                );
                self.apply(action);
            }
            None => debug!("hint {} payload {:?} ignored", event.kind, event.payload),
        }
    }

    pub(crate) fn write(&self, path: &Path, value: &impl ControlValue) {
        self.writer.write_control(path, value.as_control_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::hint::HintKind;
    use crate::hw::MockControlWriter;
    use crate::test_utils::{controller_with, seed_control_tree, RecordingWriter};
    use tempfile::TempDir;

    #[test]
    fn test_init_discovers_both_tables() {
        let dir = TempDir::new().unwrap();
        let paths = seed_control_tree(
            dir.path(),
            Some("216000 408000 600000\n"),
            Some("200000000 480000000\n"),
        );

        let controller = PowerController::init(PowerConfig { paths }, RecordingWriter::default());
        assert_eq!(controller.tables().cpu_cluster0.len(), 3);
        assert_eq!(controller.tables().gpu.get(1), Some("480000000"));
        assert!(controller.writer().writes().is_empty());
    }

    #[test]
    fn test_init_with_missing_sources_continues_empty() {
        let dir = TempDir::new().unwrap();
        let paths = ControlPaths::rooted_at(dir.path());

        let controller = PowerController::init(PowerConfig { paths }, RecordingWriter::default());
        assert_eq!(controller.tables(), &FrequencyTables::empty());
    }

    #[test]
    fn test_hint_interaction_writes_ddr_state() {
        let controller = controller_with("", "");
        let ddr = controller.paths().ddr_state.clone();

        controller.hint(&HintEvent::new(HintKind::Interaction, Some(1)));
        controller.hint(&HintEvent::new(HintKind::Interaction, None));

        assert_eq!(controller.writer().values_for(&ddr), vec!["p", "n"]);
    }

    #[test]
    fn test_low_power_hint_writes_nothing() {
        let mut writer = MockControlWriter::new();
        writer.expect_write_control().never();
        let controller =
            PowerController::with_tables(ControlPaths::default(), FrequencyTables::empty(), writer);

        controller.hint(&HintEvent::new(HintKind::LowPower, Some(1)));
        controller.hint(&HintEvent::new(HintKind::VrMode, Some(1)));
        controller.hint(&HintEvent::from_code(0xdead, None));
    }

    #[test]
    fn test_apply_low_power_mode_directly() {
        let controller = controller_with("", "");
        let governor = controller.paths().cpu_governor.clone();

        controller.apply(BoostAction::LowPowerMode(true));
        controller.apply(BoostAction::LowPowerMode(false));

        assert_eq!(
            controller.writer().values_for(&governor),
            vec!["powersave", "interactive"]
        );
    }
}
