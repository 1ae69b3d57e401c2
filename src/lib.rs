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

//! rkpower - power hint module for RK312x
//!
//! Platform-facing wrapper around `rkp-core`: module identity, the three
//! host entry points, and logging setup.

pub mod logger;
pub mod module;

pub use module::{ModuleInfo, PowerModule, MODULE_INFO};
pub use rkp_core::{HintKind, PowerConfig};

#[cfg(test)]
pub mod test_utils;
