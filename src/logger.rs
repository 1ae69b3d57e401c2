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

//! Logging setup
//!
//! Diagnostics go through `tracing`; `init_logging` installs the subscriber.
//! Entry point activity is additionally appended to a JSON-lines event log.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::anyhow;
use lazy_static::lazy_static;
use rkp_core::constants::module::LOG_TAG;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_PATH: &str = "/data/vendor/rkpower/events.json";
const FALLBACK_LOG_PATH: &str = "/data/local/tmp/rkpower_events.json";

lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn open_append(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Install the tracing subscriber.
///
/// Level defaults to `info` and follows `RUST_LOG` when set. Fails if a
/// global subscriber is already installed.
pub fn try_init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("tracing subscriber already installed: {}", e))
}

/// Install the subscriber and open the default event log
pub fn init_logging() {
    let _ = try_init_tracing();
    init_event_log(Path::new(DEFAULT_LOG_PATH));
}

/// Route event records to `path`, falling back to the temp location
pub fn init_event_log(path: &Path) {
    let file = open_append(path).or_else(|| open_append(Path::new(FALLBACK_LOG_PATH)));
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = file;
    }
}

/// Append one `{ts_ms, tag, event, data}` record
pub fn log_event(event: &str, data: Value) {
    let line = json!({
        "ts_ms": now_millis(),
        "tag": LOG_TAG,
        "event": event,
        "data": data,
    })
    .to_string();

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(f) = guard.as_mut() {
            let _ = writeln!(f, "{}", line);
            return;
        }
    }
    // Not initialized: best effort to the fallback, silently
    if let Some(mut f) = open_append(Path::new(FALLBACK_LOG_PATH)) {
        let _ = writeln!(f, "{}", line);
    }
}
