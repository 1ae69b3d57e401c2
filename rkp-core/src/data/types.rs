//! Typed control values
//!
//! Each control file accepts a small closed set of literals. Modelling them as
//! enums keeps arbitrary strings out of the write path; the wire text is only
//! produced by `as_control_str`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::values;

/// A value that can be written to a control file
pub trait ControlValue {
    /// Literal text written to the kernel, without a trailing newline
    fn as_control_str(&self) -> &str;
}

/// cpufreq governor for CPU cluster 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuGovernor {
    Interactive,
    Performance,
    Powersave,
}

impl ControlValue for CpuGovernor {
    fn as_control_str(&self) -> &str {
        match self {
            Self::Interactive => values::governor::INTERACTIVE,
            Self::Performance => values::governor::PERFORMANCE,
            Self::Powersave => values::governor::POWERSAVE,
        }
    }
}

/// GPU dynamic frequency scaling switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuDvfs {
    Disabled,
    Enabled,
}

impl ControlValue for GpuDvfs {
    fn as_control_str(&self) -> &str {
        match self {
            Self::Disabled => values::gpu::DVFS_DISABLED,
            Self::Enabled => values::gpu::DVFS_ENABLED,
        }
    }
}

/// Fixed GPU clock rates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuClock {
    /// 480 MHz
    Boost,
    /// 200 MHz
    Default,
}

impl ControlValue for GpuClock {
    fn as_control_str(&self) -> &str {
        match self {
            Self::Boost => values::gpu::CLOCK_BOOST,
            Self::Default => values::gpu::CLOCK_DEFAULT,
        }
    }
}

/// DDR state requested through the video_state device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdrPriority {
    Raise,
    Lower,
}

impl DdrPriority {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Raise } else { Self::Lower }
    }
}

impl ControlValue for DdrPriority {
    fn as_control_str(&self) -> &str {
        match self {
            Self::Raise => values::ddr::RAISE,
            Self::Lower => values::ddr::LOWER,
        }
    }
}

/// CPU hotplug state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreState {
    Online,
    Offline,
}

impl ControlValue for CoreState {
    fn as_control_str(&self) -> &str {
        match self {
            Self::Online => values::core::ONLINE,
            Self::Offline => values::core::OFFLINE,
        }
    }
}

/// CPU max frequency ceiling used on wake/sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveCeiling {
    Awake,
    Asleep,
}

impl ControlValue for InteractiveCeiling {
    fn as_control_str(&self) -> &str {
        match self {
            Self::Awake => values::interactive::AWAKE_MAX_FREQ,
            Self::Asleep => values::interactive::ASLEEP_MAX_FREQ,
        }
    }
}

/// A discovered frequency token that is safe to write.
///
/// Only tokens starting with a decimal digit are accepted; the rest of the
/// token is passed through as the kernel reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency(String);

impl Frequency {
    pub fn parse(token: &str) -> Option<Self> {
        match token.as_bytes().first() {
            Some(b) if b.is_ascii_digit() => Some(Self(token.to_string())),
            _ => None,
        }
    }
}

impl ControlValue for Frequency {
    fn as_control_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
