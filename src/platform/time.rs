//! Frame timing

use crate::consts::MAX_FRAME_DT;

/// Converts host frame timestamps (milliseconds) into simulation dt
///
/// The first frame yields zero. Long gaps (tab hidden, debugger) are
/// clamped so one frame never integrates more than `MAX_FRAME_DT`.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, MAX_FRAME_DT)
    }
}
