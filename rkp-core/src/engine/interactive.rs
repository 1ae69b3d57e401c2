//! Interactive state handling
//!
//! Fixed reaction to the system going to sleep or waking up, independent of
//! hint dispatch.

use tracing::debug;

use crate::data::{CoreState, InteractiveCeiling};
use crate::engine::controller::PowerController;
use crate::hw::ControlWriter;

impl<W: ControlWriter> PowerController<W> {
    /// Raise the CPU ceiling and bring cpu1..cpu3 online when `on`; cap the
    /// ceiling and take them offline otherwise.
    pub fn set_interactive(&self, on: bool) {
        debug!("set_interactive: {}", on);
        let (ceiling, cores) = if on {
            (InteractiveCeiling::Awake, CoreState::Online)
        } else {
            (InteractiveCeiling::Asleep, CoreState::Offline)
        };

        let paths = self.paths();
        self.write(&paths.cpu_max_freq, &ceiling);
        for online in &paths.cpu_secondary_online {
            self.write(online, &cores);
        }
    }
}
