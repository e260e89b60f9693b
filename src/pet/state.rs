use crate::pet::host::ScreenGeometry;
use crate::pet::model::{Direction, IdleKind, Mode, GROUND_OFFSET, WINDOW_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Integer coordinates as sent to the host window.
    pub fn rounded(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0 as f64, value.1 as f64)
    }
}

/// Labels the visual layer uses to pick sprite assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualLabels {
    pub mode: &'static str,
    pub direction: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    pub mode: Mode,
    pub position: Position,
    pub direction: Direction,
    pub vertical_velocity: f64,
    pub idle_cycles_remaining: u32,
    pub last_idle_mode: Option<IdleKind>,
    pub direction_change_deadline_ms: u64,
    pub screen_bounds: ScreenGeometry,
    pub ground_line: f64,
    epoch: u64,
    animation_restarts: u64,
}

pub fn ground_line_for(screen: ScreenGeometry) -> f64 {
    screen.height as f64 - WINDOW_HEIGHT as f64 + GROUND_OFFSET
}

impl CharacterState {
    pub fn new(screen_bounds: ScreenGeometry, position: Position, now_ms: u64) -> Self {
        Self {
            mode: Mode::Walking,
            position,
            direction: Direction::Forward,
            vertical_velocity: 0.0,
            idle_cycles_remaining: 0,
            last_idle_mode: None,
            direction_change_deadline_ms: now_ms + crate::pet::model::MIN_WALK_TIME_MS,
            screen_bounds,
            ground_line: ground_line_for(screen_bounds),
            epoch: 0,
            animation_restarts: 0,
        }
    }

    /// Ground-adjusted y coordinate for the given mode's sprite.
    pub fn resting_y(&self, mode: Mode) -> f64 {
        self.ground_line + mode.ground_delta()
    }

    /// Counter bumped on every mode change. Scheduled work captures it and
    /// only runs if it is unchanged when due.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn animation_restarts(&self) -> u64 {
        self.animation_restarts
    }

    pub fn labels(&self) -> VisualLabels {
        VisualLabels {
            mode: self.mode.label(),
            direction: self.direction.label(),
        }
    }

    pub(crate) fn enter(&mut self, mode: Mode) -> Mode {
        let previous = self.mode;
        if previous != mode {
            tracing::debug!(from = %previous, to = %mode, "pet mode changed");
            self.epoch = self.epoch.wrapping_add(1);
        }
        self.mode = mode;
        previous
    }

    pub(crate) fn restart_animation(&mut self) {
        self.animation_restarts = self.animation_restarts.wrapping_add(1);
    }

    pub(crate) fn reset_direction_timer(&mut self, now_ms: u64) {
        self.direction_change_deadline_ms = now_ms + crate::pet::model::MIN_WALK_TIME_MS;
    }
}
