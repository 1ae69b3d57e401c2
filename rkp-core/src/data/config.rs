//! Configuration management
//!
//! Control paths default to the RK312x layout. Boards whose GPU node sits at a
//! different address can load a JSON override explicitly; missing fields keep
//! their defaults. Paths are fixed once a controller is built.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::paths;
use crate::error::{PowerError, Result};

/// Every kernel control file the module touches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlPaths {
    pub cpu_governor: PathBuf,
    pub cpu_available_freqs: PathBuf,
    pub cpu_max_freq: PathBuf,
    pub cpu_min_freq: PathBuf,
    /// Hotplug switches for cpu1..cpu3
    pub cpu_secondary_online: Vec<PathBuf>,
    pub gpu_available_freqs: PathBuf,
    pub gpu_clock: PathBuf,
    pub gpu_dvfs_enable: PathBuf,
    pub ddr_state: PathBuf,
}

impl Default for ControlPaths {
    fn default() -> Self {
        Self {
            cpu_governor: PathBuf::from(paths::cpu::GOVERNOR),
            cpu_available_freqs: PathBuf::from(paths::cpu::AVAILABLE_FREQS),
            cpu_max_freq: PathBuf::from(paths::cpu::SCALING_MAX_FREQ),
            cpu_min_freq: PathBuf::from(paths::cpu::SCALING_MIN_FREQ),
            cpu_secondary_online: paths::cpu::SECONDARY_ONLINE
                .iter()
                .map(PathBuf::from)
                .collect(),
            gpu_available_freqs: PathBuf::from(paths::gpu::AVAILABLE_FREQS),
            gpu_clock: PathBuf::from(paths::gpu::CLOCK),
            gpu_dvfs_enable: PathBuf::from(paths::gpu::DVFS_ENABLE),
            ddr_state: PathBuf::from(paths::ddr::STATE),
        }
    }
}

impl ControlPaths {
    /// Re-base the default layout under `root`.
    ///
    /// `/dev/video_state` becomes `<root>/dev/video_state` and so on.
    pub fn rooted_at(root: &Path) -> Self {
        let rebase = |p: &str| root.join(p.trim_start_matches('/'));
        Self {
            cpu_governor: rebase(paths::cpu::GOVERNOR),
            cpu_available_freqs: rebase(paths::cpu::AVAILABLE_FREQS),
            cpu_max_freq: rebase(paths::cpu::SCALING_MAX_FREQ),
            cpu_min_freq: rebase(paths::cpu::SCALING_MIN_FREQ),
            cpu_secondary_online: paths::cpu::SECONDARY_ONLINE
                .iter()
                .map(|p| rebase(*p))
                .collect(),
            gpu_available_freqs: rebase(paths::gpu::AVAILABLE_FREQS),
            gpu_clock: rebase(paths::gpu::CLOCK),
            gpu_dvfs_enable: rebase(paths::gpu::DVFS_ENABLE),
            ddr_state: rebase(paths::ddr::STATE),
        }
    }

    fn all(&self) -> impl Iterator<Item = &PathBuf> {
        [
            &self.cpu_governor,
            &self.cpu_available_freqs,
            &self.cpu_max_freq,
            &self.cpu_min_freq,
            &self.gpu_available_freqs,
            &self.gpu_clock,
            &self.gpu_dvfs_enable,
            &self.ddr_state,
        ]
        .into_iter()
        .chain(self.cpu_secondary_online.iter())
    }

    /// Every path must be absolute
    pub fn validate(&self) -> Result<()> {
        if let Some(p) = self.all().find(|p| !p.is_absolute()) {
            return Err(PowerError::config(format!(
                "control path {} is not absolute",
                p.display()
            )));
        }
        Ok(())
    }
}

/// Top-level module configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerConfig {
    pub paths: ControlPaths,
}

impl PowerConfig {
    /// Load and validate a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PowerError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: PowerConfig = serde_json::from_str(&content)?;
        config.paths.validate()?;
        info!("Loaded control path overrides from {:?}", path);
        Ok(config)
    }
}
