//! Control file write primitive
//!
//! Every device change in the module funnels through `write_control`: open
//! the control file write-only, write the literal value once (no newline),
//! close. Failures are logged and never reach the caller.
//!
//! Control files are opened with truncation so a shorter value fully
//! replaces a longer one on regular files; sysfs attributes and character
//! devices ignore it. Missing files are never created.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::{debug, error};

use crate::error::{PowerError, Result};

/// Sink for control file writes.
///
/// Production code uses [`SysfsWriter`]; tests substitute a recorder or mock.
#[cfg_attr(test, mockall::automock)]
pub trait ControlWriter {
    /// Write `value` to the control file at `path`, best effort
    fn write_control(&self, path: &Path, value: &str);
}

/// Writes straight to the kernel control files
#[derive(Debug, Clone, Copy, Default)]
pub struct SysfsWriter;

impl ControlWriter for SysfsWriter {
    fn write_control(&self, path: &Path, value: &str) {
        write_control(path, value)
    }
}

/// Write `value` to `path`, logging any failure
pub fn write_control(path: &Path, value: &str) {
    if let Err(e) = try_write_control(path, value) {
        error!("{}", e);
    }
}

/// Write `value` to `path`, returning the number of bytes written
pub fn try_write_control(path: &Path, value: &str) -> Result<usize> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| PowerError::ControlOpen {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("sysfs writing to {:?}: {}", path, value);
    write_to(file, path, value)
}

/// Issue a single write of `value` into an open handle.
///
/// The handle is consumed, so it is released whether the write succeeds,
/// fails, or comes up short. A short write is not retried.
pub fn write_to<W: Write>(mut handle: W, path: &Path, value: &str) -> Result<usize> {
    let expected = value.len();
    let written = handle
        .write(value.as_bytes())
        .map_err(|source| PowerError::ControlWrite {
            path: path.to_path_buf(),
            source,
        })?;

    if written < expected {
        return Err(PowerError::ShortWrite {
            path: path.to_path_buf(),
            written,
            expected,
        });
    }
    Ok(written)
}
