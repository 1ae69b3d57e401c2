//! Constants and configuration values for rkpower
//!
//! Centralizes control paths, buffer limits and the literal values accepted by
//! the kernel control files. Other modules build typed values on top of these
//! and never spell the literals themselves.

/// Kernel control paths for the RK312x platform
pub mod paths {
    /// CPU cluster 0 cpufreq policy
    pub mod cpu {
        pub const GOVERNOR: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_governor";
        pub const AVAILABLE_FREQS: &str =
            "/sys/devices/system/cpu/cpu0/cpufreq/scaling_available_frequencies";
        pub const SCALING_MAX_FREQ: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_max_freq";
        pub const SCALING_MIN_FREQ: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_min_freq";

        /// Hotplug switches for the secondary cores
        pub const SECONDARY_ONLINE: [&str; 3] = [
            "/sys/devices/system/cpu/cpu1/online",
            "/sys/devices/system/cpu/cpu2/online",
            "/sys/devices/system/cpu/cpu3/online",
        ];
    }

    /// Mali GPU devfreq node
    pub mod gpu {
        pub const AVAILABLE_FREQS: &str = "/sys/devices/10091000.gpu/available_frequencies";
        pub const CLOCK: &str = "/sys/devices/10091000.gpu/clock";
        pub const DVFS_ENABLE: &str = "/sys/devices/10091000.gpu/dvfs_enable";
    }

    /// DDR state pseudo-device
    pub mod ddr {
        pub const STATE: &str = "/dev/video_state";
    }
}

/// Size limits
pub mod limits {
    /// Read buffer for frequency discovery, one byte kept for the terminator
    pub const BUFFER_LENGTH: usize = 128;

    /// Bytes actually read from a frequency source
    pub const READ_CAPACITY: usize = BUFFER_LENGTH - 1;

    /// Entries held per frequency table
    pub const FREQ_TABLE_CAPACITY: usize = 10;
}

/// Literal values written to control files
pub mod values {
    pub mod governor {
        pub const INTERACTIVE: &str = "interactive";
        pub const PERFORMANCE: &str = "performance";
        pub const POWERSAVE: &str = "powersave";
    }

    pub mod gpu {
        pub const DVFS_DISABLED: &str = "0";
        pub const DVFS_ENABLED: &str = "1";

        /// 480 MHz
        pub const CLOCK_BOOST: &str = "480000000";
        /// 200 MHz
        pub const CLOCK_DEFAULT: &str = "200000000";
    }

    /// video_state protocol: 'p' selects the performance DDR state, 'n' normal
    pub mod ddr {
        pub const RAISE: &str = "p";
        pub const LOWER: &str = "n";
    }

    pub mod core {
        pub const ONLINE: &str = "1";
        pub const OFFLINE: &str = "0";
    }

    /// CPU max frequency ceilings (kHz) applied on wake and sleep
    pub mod interactive {
        pub const AWAKE_MAX_FREQ: &str = "1200000";
        pub const ASLEEP_MAX_FREQ: &str = "816000";
    }
}

/// Module identity reported to the host
pub mod module {
    pub const ID: &str = "power";
    pub const NAME: &str = "RK312x Power HAL";
    pub const AUTHOR: &str = "Rockchip";
    pub const VERSION: &str = "4.0";
    pub const LOG_TAG: &str = "RKPowerHAL";

    /// Module API version 0.5
    pub const API_VERSION: (u8, u8) = (0, 5);
}
