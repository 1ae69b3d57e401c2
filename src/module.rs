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

//! Host-facing power module
//!
//! The platform loads the module once, then calls `hint` for every power
//! hint and `set_interactive` on sleep/wake. Construction performs frequency
//! discovery, so no other entry point can run before it.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use rkp_core::constants::module;
use rkp_core::{ControlWriter, HintEvent, PowerConfig, PowerController, SysfsWriter};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::logger::log_event;

/// Identity reported to the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub author: &'static str,
    pub api_version: (u8, u8),
    pub version: &'static str,
}

pub const MODULE_INFO: ModuleInfo = ModuleInfo {
    id: module::ID,
    name: module::NAME,
    author: module::AUTHOR,
    api_version: module::API_VERSION,
    version: module::VERSION,
};

/// Loaded power module. Cheap to clone; clones share one controller.
pub struct PowerModule<W: ControlWriter = SysfsWriter> {
    controller: Arc<PowerController<W>>,
}

impl<W: ControlWriter> Clone for PowerModule<W> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
        }
    }
}

impl PowerModule<SysfsWriter> {
    /// Load with the built-in RK312x control paths
    pub fn init() -> Self {
        Self::init_with(PowerConfig::default(), SysfsWriter)
    }

    /// Load with a configuration file that must exist and parse
    pub fn init_from_file(path: &Path) -> anyhow::Result<Self> {
        let config = PowerConfig::load(path)
            .with_context(|| format!("loading power module config {}", path.display()))?;
        Ok(Self::init_with(config, SysfsWriter))
    }
}

impl<W: ControlWriter> PowerModule<W> {
    pub fn init_with(config: PowerConfig, writer: W) -> Self {
        info!("{} version {}", MODULE_INFO.name, MODULE_INFO.version);
        let controller = PowerController::init(config, writer);

        let tables = controller.tables();
        log_event(
            "init",
            json!({
                "module": MODULE_INFO,
                "cpu_clust0_freqs": tables.cpu_cluster0.iter().collect::<Vec<_>>(),
                "gpu_freqs": tables.gpu.iter().collect::<Vec<_>>(),
            }),
        );
        Self {
            controller: Arc::new(controller),
        }
    }

    pub fn info(&self) -> &'static ModuleInfo {
        &MODULE_INFO
    }

    pub fn controller(&self) -> &Arc<PowerController<W>> {
        &self.controller
    }

    /// Deliver a power hint by raw code, with the optional mode selector
    pub fn hint(&self, code: u32, data: Option<i32>) {
        let event = HintEvent::from_code(code, data);
        log_event(
            "hint",
            json!({"kind": event.kind.to_string(), "payload": data}),
        );
        self.controller.hint(&event);
    }

    /// System entered (`true`) or left (`false`) the interactive state
    pub fn set_interactive(&self, on: bool) {
        log_event("set_interactive", json!({"on": on}));
        self.controller.set_interactive(on);
    }
}
