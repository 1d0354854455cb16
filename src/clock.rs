//! Frame timing for the host loop

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Seconds since the previous tick
    pub delta_time: f64,
    /// Seconds accumulated over all ticks
    pub elapsed: f64,
    /// Frames finished so far
    pub frame: u64,
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a frame at `now` seconds. The first tick has zero delta.
    pub fn tick(&mut self, now: f64) {
        self.delta_time = match self.last {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.elapsed += self.delta_time;
        self.last = Some(now);
    }

    pub fn end_frame(&mut self) {
        self.frame += 1;
    }

    pub fn fps(&self) -> f64 {
        if self.delta_time > 0.0 {
            1.0 / self.delta_time
        } else {
            0.0
        }
    }
}
