/// Width of the walking window footprint. Screen-edge collisions use this.
pub const WINDOW_WIDTH: u32 = 80;
/// Height of the walking window footprint.
pub const WINDOW_HEIGHT: u32 = 130;

/// Horizontal pixels advanced per tick while walking.
pub const WALK_SPEED: f64 = 2.0;
/// Vertical velocity gained per tick while falling.
pub const GRAVITY: f64 = 0.8;
/// Distance the walking window extends past the bottom of the work area.
pub const GROUND_OFFSET: f64 = 45.0;

pub const MIN_UPDATE_INTERVAL_MS: u64 = 24;
pub const MIN_WALK_TIME_MS: u64 = 5_000;
/// Chance per tick of a spontaneous direction flip.
pub const DIRECTION_CHANGE_CHANCE: f64 = 0.01;
pub const IDLE_CHECK_INTERVAL_MS: u64 = 10_000;
pub const FALLEN_RECOVERY_DELAY_MS: u64 = 2_000;

pub const WALKING_SPRITE_HEIGHT: u32 = 86;
pub const FALLING_SPRITE_HEIGHT: u32 = 68;
pub const STANDING_SPRITE_HEIGHT: u32 = 86;
pub const SLEEPING_SPRITE_HEIGHT: u32 = 44;
pub const STRETCHING_SPRITE_HEIGHT: u32 = 90;

pub const SLEEPING_WINDOW_WIDTH: u32 = 108;
pub const SLEEPING_WINDOW_HEIGHT: u32 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Walking,
    Dragging,
    Falling,
    Fallen,
    Standing,
    Sleeping,
    Stretching,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Walking,
        Mode::Dragging,
        Mode::Falling,
        Mode::Fallen,
        Mode::Standing,
        Mode::Sleeping,
        Mode::Stretching,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Walking => "walking",
            Mode::Dragging => "dragging",
            Mode::Falling => "falling",
            Mode::Fallen => "fallen",
            Mode::Standing => "standing",
            Mode::Sleeping => "sleeping",
            Mode::Stretching => "stretching",
        }
    }

    pub fn idle_kind(self) -> Option<IdleKind> {
        match self {
            Mode::Standing => Some(IdleKind::Standing),
            Mode::Sleeping => Some(IdleKind::Sleeping),
            Mode::Stretching => Some(IdleKind::Stretching),
            _ => None,
        }
    }

    pub fn is_idle(self) -> bool {
        self.idle_kind().is_some()
    }

    pub fn footprint(self) -> Footprint {
        match self {
            Mode::Walking | Mode::Dragging | Mode::Standing => {
                Footprint::new(WINDOW_WIDTH, WALKING_SPRITE_HEIGHT, WINDOW_WIDTH, WINDOW_HEIGHT)
            }
            Mode::Falling | Mode::Fallen => {
                Footprint::new(WINDOW_WIDTH, FALLING_SPRITE_HEIGHT, WINDOW_WIDTH, WINDOW_HEIGHT)
            }
            Mode::Sleeping => Footprint::new(
                SLEEPING_WINDOW_WIDTH,
                SLEEPING_SPRITE_HEIGHT,
                SLEEPING_WINDOW_WIDTH,
                SLEEPING_WINDOW_HEIGHT,
            ),
            Mode::Stretching => Footprint::new(
                WINDOW_WIDTH,
                STRETCHING_SPRITE_HEIGHT,
                WINDOW_WIDTH,
                WINDOW_HEIGHT,
            ),
        }
    }

    /// Vertical shift that keeps this mode's sprite standing on the walking
    /// sprite's ground line.
    pub fn ground_delta(self) -> f64 {
        WALKING_SPRITE_HEIGHT as f64 - self.footprint().sprite_height as f64
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdleKind {
    Standing,
    Sleeping,
    Stretching,
}

impl IdleKind {
    pub const ALL: [IdleKind; 3] = [IdleKind::Standing, IdleKind::Sleeping, IdleKind::Stretching];

    pub fn mode(self) -> Mode {
        match self {
            IdleKind::Standing => Mode::Standing,
            IdleKind::Sleeping => Mode::Sleeping,
            IdleKind::Stretching => Mode::Stretching,
        }
    }

    /// Inclusive range of animation cycles an idle bout lasts.
    pub fn cycle_range(self) -> (u32, u32) {
        match self {
            IdleKind::Standing => (2, 4),
            IdleKind::Sleeping => (5, 8),
            IdleKind::Stretching => (2, 4),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards the right edge of the screen.
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "right",
            Direction::Backward => "left",
        }
    }
}

/// Sprite box (anchored at the window's top-left corner) and the window size
/// needed to show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub sprite_width: u32,
    pub sprite_height: u32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Footprint {
    pub const fn new(sprite_width: u32, sprite_height: u32, window_width: u32, window_height: u32) -> Self {
        Self {
            sprite_width,
            sprite_height,
            window_width,
            window_height,
        }
    }

    pub fn window_size(self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn contains(self, local: (f64, f64)) -> bool {
        local.0 >= 0.0
            && local.1 >= 0.0
            && local.0 < self.sprite_width as f64
            && local.1 < self.sprite_height as f64
    }
}
