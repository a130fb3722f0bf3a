use serde::Serialize;

use super::non_negative;

pub const DEFAULT_VOLUME_3H: u32 = 0;

/// Rain volume for the last three hours, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rain {
    volume_3h: u32,
}

impl Rain {
    pub fn new(volume_3h: i64) -> Self {
        Self { volume_3h: non_negative("rain_3h", volume_3h, DEFAULT_VOLUME_3H) }
    }

    pub fn volume_3h(&self) -> u32 {
        self.volume_3h
    }
}
