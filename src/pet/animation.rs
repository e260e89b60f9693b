use crate::pet::model::Mode;

/// Frame strip layout and timing for one mode's sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub frames: u32,
    pub cycle_ms: u64,
}

pub fn animation_for(mode: Mode) -> AnimationSpec {
    match mode {
        Mode::Walking => AnimationSpec {
            frames: 8,
            cycle_ms: 800,
        },
        Mode::Dragging => AnimationSpec {
            frames: 4,
            cycle_ms: 400,
        },
        Mode::Falling => AnimationSpec {
            frames: 2,
            cycle_ms: 200,
        },
        Mode::Fallen => AnimationSpec {
            frames: 1,
            cycle_ms: 1_000,
        },
        Mode::Standing => AnimationSpec {
            frames: 4,
            cycle_ms: 1_000,
        },
        Mode::Sleeping => AnimationSpec {
            frames: 4,
            cycle_ms: 1_600,
        },
        Mode::Stretching => AnimationSpec {
            frames: 6,
            cycle_ms: 1_000,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    pub frame: u32,
    pub frames: u32,
    /// Set exactly once when an idle animation finishes its current cycle.
    pub cycle_completed: bool,
}

/// Drives sprite frames for the visual layer.
///
/// Walking, dragging and falling loop forever. Idle animations play a single
/// cycle, report completion once, then hold the last frame until the engine
/// restarts them.
#[derive(Debug, Clone, Default)]
pub struct SpriteAnimator {
    current: Option<(Mode, u64)>,
    cycle_start_ms: u64,
    completion_reported: bool,
}

impl SpriteAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, mode: Mode, restart_token: u64, now_ms: u64) -> AnimationFrame {
        if self.current != Some((mode, restart_token)) {
            self.current = Some((mode, restart_token));
            self.cycle_start_ms = now_ms;
            self.completion_reported = false;
        }

        let spec = animation_for(mode);
        let elapsed = now_ms.saturating_sub(self.cycle_start_ms);
        let frame_ms = (spec.cycle_ms / spec.frames as u64).max(1);

        if !mode.is_idle() {
            let frame = ((elapsed % spec.cycle_ms) / frame_ms) as u32;
            return AnimationFrame {
                frame: frame.min(spec.frames - 1),
                frames: spec.frames,
                cycle_completed: false,
            };
        }

        if elapsed >= spec.cycle_ms {
            let cycle_completed = !self.completion_reported;
            self.completion_reported = true;
            return AnimationFrame {
                frame: spec.frames - 1,
                frames: spec.frames,
                cycle_completed,
            };
        }

        AnimationFrame {
            frame: ((elapsed / frame_ms) as u32).min(spec.frames - 1),
            frames: spec.frames,
            cycle_completed: false,
        }
    }
}
