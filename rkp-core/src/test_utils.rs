//! Test utilities for the core crate

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::data::ControlPaths;
use crate::engine::{FrequencyTables, PowerController};
use crate::hw::{ControlWriter, FreqDomain, FrequencyTable};

/// Records every write instead of touching the filesystem
#[derive(Debug, Default)]
pub struct RecordingWriter {
    writes: Mutex<Vec<(PathBuf, String)>>,
}

impl RecordingWriter {
    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn values_for(&self, path: &Path) -> Vec<String> {
        self.writes()
            .into_iter()
            .filter(|(p, _)| p == path)
            .map(|(_, v)| v)
            .collect()
    }
}

impl ControlWriter for RecordingWriter {
    fn write_control(&self, path: &Path, value: &str) {
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), value.to_string()));
    }
}

/// Controller over the default paths with tables built from literal content
pub fn controller_with(cpu_freqs: &str, gpu_freqs: &str) -> PowerController<RecordingWriter> {
    let tables = FrequencyTables {
        cpu_cluster0: FrequencyTable::from_content(FreqDomain::CpuCluster0, cpu_freqs),
        gpu: FrequencyTable::from_content(FreqDomain::Gpu, gpu_freqs),
    };
    PowerController::with_tables(ControlPaths::default(), tables, RecordingWriter::default())
}

/// Create every control file under `root` with boot-time contents.
///
/// A frequency source given as `None` is left absent.
pub fn seed_control_tree(
    root: &Path,
    cpu_freqs: Option<&str>,
    gpu_freqs: Option<&str>,
) -> ControlPaths {
    let paths = ControlPaths::rooted_at(root);
    let mut files = vec![
        (&paths.cpu_governor, "interactive"),
        (&paths.cpu_max_freq, "1200000"),
        (&paths.cpu_min_freq, "216000"),
        (&paths.gpu_clock, "200000000"),
        (&paths.gpu_dvfs_enable, "1"),
        (&paths.ddr_state, "n"),
    ];
    if let Some(freqs) = cpu_freqs {
        files.push((&paths.cpu_available_freqs, freqs));
    }
    if let Some(freqs) = gpu_freqs {
        files.push((&paths.gpu_available_freqs, freqs));
    }
    files.extend(paths.cpu_secondary_online.iter().map(|p| (p, "1")));

    for (path, content) in files {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    paths
}
