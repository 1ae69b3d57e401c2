/*
 * This file is part of rkpower.
 *
 * Copyright (C) 2025 rkpower contributors
 *
 * rkpower is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * rkpower is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with rkpower. If not, see <https://www.gnu.org/licenses/>.
 */

/*
 * Test utilities for the power module
 *
 * Builds a scratch copy of the control file layout so entry points can be
 * exercised against real files.
 */

use std::fs;
use std::path::Path;

use rkp_core::test_utils::seed_control_tree;
use rkp_core::{ControlPaths, PowerConfig};
use tempfile::TempDir;

use crate::logger;

/// Temporary control tree with boot-time contents
pub struct ControlTree {
    dir: TempDir,
    pub paths: ControlPaths,
}

impl ControlTree {
    /// Create the tree and point the event log inside it
    pub fn new(cpu_freqs: &str, gpu_freqs: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let paths = seed_control_tree(dir.path(), Some(cpu_freqs), Some(gpu_freqs));
        logger::init_event_log(&dir.path().join("events.json"));
        Self { dir, paths }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> PowerConfig {
        PowerConfig {
            paths: self.paths.clone(),
        }
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    pub fn events(&self) -> Vec<serde_json::Value> {
        fs::read_to_string(self.root().join("events.json"))
            .unwrap_or_default()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_control_tree_boot_state() {
        let tree = ControlTree::new("216000 408000", "");
        assert_eq!(tree.read(&tree.paths.cpu_governor), "interactive");
        assert_eq!(tree.read(&tree.paths.cpu_available_freqs), "216000 408000");
        assert_eq!(tree.read(&tree.paths.ddr_state), "n");
        assert!(tree
            .paths
            .cpu_secondary_online
            .iter()
            .all(|p| tree.read(p) == "1"));
    }
}
