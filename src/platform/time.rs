//! Frame clock: monotonically increasing timestamps in, seconds per frame out

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous timestamp. The first call returns 0, and
    /// long gaps (a hidden tab, a debugger pause) are capped at
    /// [`MAX_FRAME_DT`].
    pub fn dt(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) * 0.001) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
