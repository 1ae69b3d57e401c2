//! Hint model and dispatch table
//!
//! `dispatch` is a pure mapping from a hint to at most one boost action. It
//! holds no state; the controller applies whatever it returns.

use std::fmt;

/// Power hint kinds delivered by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKind {
    Vsync,
    Interaction,
    VideoEncode,
    VideoDecode,
    LowPower,
    SustainedPerformance,
    VrMode,
    /// Vendor performance mode request
    Performance,
    Unknown(u32),
}

impl HintKind {
    pub const VSYNC: u32 = 0x0000_0001;
    pub const INTERACTION: u32 = 0x0000_0002;
    pub const VIDEO_ENCODE: u32 = 0x0000_0003;
    pub const VIDEO_DECODE: u32 = 0x0000_0004;
    pub const LOW_POWER: u32 = 0x0000_0005;
    pub const SUSTAINED_PERFORMANCE: u32 = 0x0000_0006;
    pub const VR_MODE: u32 = 0x0000_0007;
    pub const PERFORMANCE: u32 = 0x0000_1000;

    pub fn from_code(code: u32) -> Self {
        match code {
            Self::VSYNC => Self::Vsync,
            Self::INTERACTION => Self::Interaction,
            Self::VIDEO_ENCODE => Self::VideoEncode,
            Self::VIDEO_DECODE => Self::VideoDecode,
            Self::LOW_POWER => Self::LowPower,
            Self::SUSTAINED_PERFORMANCE => Self::SustainedPerformance,
            Self::VR_MODE => Self::VrMode,
            Self::PERFORMANCE => Self::Performance,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::Vsync => Self::VSYNC,
            Self::Interaction => Self::INTERACTION,
            Self::VideoEncode => Self::VIDEO_ENCODE,
            Self::VideoDecode => Self::VIDEO_DECODE,
            Self::LowPower => Self::LOW_POWER,
            Self::SustainedPerformance => Self::SUSTAINED_PERFORMANCE,
            Self::VrMode => Self::VR_MODE,
            Self::Performance => Self::PERFORMANCE,
            Self::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vsync => f.write_str("VSYNC"),
            Self::Interaction => f.write_str("INTERACTION"),
            Self::VideoEncode => f.write_str("VIDEO_ENCODE"),
            Self::VideoDecode => f.write_str("VIDEO_DECODE"),
            Self::LowPower => f.write_str("LOW_POWER"),
            Self::SustainedPerformance => f.write_str("SUSTAINED_PERFORMANCE"),
            Self::VrMode => f.write_str("VR_MODE"),
            Self::Performance => f.write_str("PERFORMANCE"),
            Self::Unknown(code) => write!(f, "UNKNOWN({:#x})", code),
        }
    }
}

/// One hint delivery: the kind plus the optional integer mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintEvent {
    pub kind: HintKind,
    pub payload: Option<i32>,
}

impl HintEvent {
    pub fn new(kind: HintKind, payload: Option<i32>) -> Self {
        Self { kind, payload }
    }

    pub fn from_code(code: u32, payload: Option<i32>) -> Self {
        Self::new(HintKind::from_code(code), payload)
    }

    /// Payload as an on/off switch; an absent payload means off
    pub fn enabled(&self) -> bool {
        self.payload.is_some_and(|mode| mode != 0)
    }
}

/// Named device-control effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostAction {
    CpuClusterBoost { max_index: usize, min_index: usize },
    GpuBoost { max_index: usize, min_index: usize },
    TouchBoost(bool),
    PerformanceMode(bool),
    LowPowerMode(bool),
}

/// Map a hint to the action it triggers.
///
/// LOW_POWER stays a no-op even though `LowPowerMode` exists; the platform
/// never wired it.
pub fn dispatch(event: &HintEvent) -> Option<BoostAction> {
    match event.kind {
        HintKind::Interaction => Some(BoostAction::TouchBoost(event.enabled())),
        HintKind::SustainedPerformance | HintKind::Performance => {
            Some(BoostAction::PerformanceMode(event.enabled()))
        }
        HintKind::Vsync
        | HintKind::VideoEncode
        | HintKind::VideoDecode
        | HintKind::LowPower
        | HintKind::VrMode
        | HintKind::Unknown(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interaction_payload_selects_touch_boost() {
        assert_eq!(
            dispatch(&HintEvent::new(HintKind::Interaction, Some(1))),
            Some(BoostAction::TouchBoost(true))
        );
        assert_eq!(
            dispatch(&HintEvent::new(HintKind::Interaction, Some(0))),
            Some(BoostAction::TouchBoost(false))
        );
        assert_eq!(
            dispatch(&HintEvent::new(HintKind::Interaction, None)),
            Some(BoostAction::TouchBoost(false))
        );
    }

    #[test]
    fn test_any_nonzero_payload_enables() {
        assert_eq!(
            dispatch(&HintEvent::new(HintKind::Performance, Some(-7))),
            Some(BoostAction::PerformanceMode(true))
        );
    }

    #[test]
    fn test_performance_hints_select_performance_mode() {
        for kind in [HintKind::SustainedPerformance, HintKind::Performance] {
            assert_eq!(
                dispatch(&HintEvent::new(kind, Some(1))),
                Some(BoostAction::PerformanceMode(true))
            );
            assert_eq!(
                dispatch(&HintEvent::new(kind, None)),
                Some(BoostAction::PerformanceMode(false))
            );
        }
    }

    #[test]
    fn test_unwired_hints_are_noops() {
        for kind in [
            HintKind::Vsync,
            HintKind::VideoEncode,
            HintKind::VideoDecode,
            HintKind::LowPower,
            HintKind::VrMode,
            HintKind::Unknown(0x42),
        ] {
            assert_eq!(dispatch(&HintEvent::new(kind, Some(1))), None, "{}", kind);
            assert_eq!(dispatch(&HintEvent::new(kind, None)), None, "{}", kind);
        }
    }

    #[test]
    fn test_code_round_trip_and_unknown() {
        assert_eq!(HintKind::from_code(2), HintKind::Interaction);
        assert_eq!(HintKind::from_code(0x1000), HintKind::Performance);
        assert_eq!(HintKind::from_code(8), HintKind::Unknown(8));
        assert_eq!(HintKind::Unknown(8).code(), 8);
        assert_eq!(HintKind::SustainedPerformance.code(), 6);
        assert_eq!(HintKind::Unknown(0x1f).to_string(), "UNKNOWN(0x1f)");
    }
}
