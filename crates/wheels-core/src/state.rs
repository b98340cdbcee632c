use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
    /// No sound triggered yet: draw a static frame when asked, then stop.
    Idle,
    /// Redraw every frame for the rest of the session.
    Active,
}

/// Whether the host should keep producing frames.
#[derive(Clone, Debug)]
pub struct RenderLoop {
    phase: LoopPhase,
    redraw_pending: bool,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    /// Starts idle with the first static frame pending.
    pub fn new() -> Self {
        Self {
            phase: LoopPhase::Idle,
            redraw_pending: true,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == LoopPhase::Active
    }

    pub fn should_draw(&self) -> bool {
        self.is_active() || self.redraw_pending
    }

    /// Record that a frame was drawn. Returns whether more frames are wanted.
    pub fn frame_drawn(&mut self) -> bool {
        self.redraw_pending = false;
        self.is_active()
    }

    /// Ask for one more frame while idle (e.g. after a resize).
    pub fn request_redraw(&mut self) {
        self.redraw_pending = true;
    }

    /// Idle -> Active; returns true only on the transition.
    pub fn activate(&mut self) -> bool {
        if self.phase == LoopPhase::Active {
            return false;
        }
        log::info!("[loop] active");
        self.phase = LoopPhase::Active;
        true
    }
}

/// Drops host callbacks that arrive faster than the target frame rate.
#[derive(Clone, Debug)]
pub struct FramePacer {
    interval: Duration,
    last: Option<Duration>,
}

impl FramePacer {
    pub fn new(frame_rate: f32) -> Self {
        Self {
            interval: Duration::from_secs_f32(1.0 / frame_rate.max(1.0)),
            last: None,
        }
    }

    /// `now` is time since any fixed origin. The first call always passes.
    pub fn ready(&mut self, now: Duration) -> bool {
        match self.last {
            // 2 ms slack for vsync jitter
            Some(last)
                if now.saturating_sub(last) + Duration::from_millis(2) < self.interval =>
            {
                false
            }
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
