use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pet::drag::{hit_test, DragHandler};
use crate::pet::host::HostWindow;
use crate::pet::idle::plan_idle;
use crate::pet::messages::PetEvent;
use crate::pet::model::{
    Direction, Mode, DIRECTION_CHANGE_CHANCE, FALLEN_RECOVERY_DELAY_MS, GRAVITY,
    IDLE_CHECK_INTERVAL_MS, WALK_SPEED, WINDOW_WIDTH,
};
use crate::pet::state::{CharacterState, Position, VisualLabels};
use crate::pet::throttle::PositionThrottle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledRecovery {
    due_ms: u64,
    epoch: u64,
}

/// Owns the character state and drives it one frame at a time.
///
/// Kinematics are fixed-step: every `step` moves the pet by the same amount
/// regardless of how much time passed since the previous one, so walking
/// speed follows the display refresh rate.
pub struct BehaviorEngine<H: HostWindow, R: Rng = StdRng> {
    host: H,
    rng: R,
    state: CharacterState,
    throttle: PositionThrottle,
    drag: DragHandler,
    last_idle_check_ms: u64,
    pending_recovery: Option<ScheduledRecovery>,
    window_size: (u32, u32),
}

impl<H: HostWindow> BehaviorEngine<H, StdRng> {
    pub fn start(host: H, now_ms: u64) -> Result<Self> {
        Self::start_with_rng(host, StdRng::from_entropy(), now_ms)
    }
}

impl<H: HostWindow, R: Rng> BehaviorEngine<H, R> {
    /// Queries the screen and the window's current position once, then
    /// seeds a walking character there.
    pub fn start_with_rng(host: H, rng: R, now_ms: u64) -> Result<Self> {
        let screen = host
            .screen_geometry()
            .context("screen geometry unavailable")?;
        let origin = host
            .window_position()
            .context("initial window position unavailable")?;
        let state = CharacterState::new(screen, Position::from(origin), now_ms);
        tracing::info!(
            screen_width = screen.width,
            screen_height = screen.height,
            x = origin.0,
            y = origin.1,
            ground_line = state.ground_line,
            "behavior engine started"
        );
        Ok(Self {
            host,
            rng,
            state,
            throttle: PositionThrottle::default(),
            drag: DragHandler::new(),
            last_idle_check_ms: now_ms,
            pending_recovery: None,
            window_size: Mode::Walking.footprint().window_size(),
        })
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn labels(&self) -> VisualLabels {
        self.state.labels()
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// One frame: due timers, idle check, per-mode physics, then the
    /// throttled position push.
    pub fn step(&mut self, now_ms: u64) {
        self.fire_due_recovery(now_ms);

        if self.state.mode == Mode::Walking
            && now_ms.saturating_sub(self.last_idle_check_ms) >= IDLE_CHECK_INTERVAL_MS
        {
            self.last_idle_check_ms = now_ms;
            self.run_idle_check(now_ms);
        }

        match self.state.mode {
            Mode::Walking => self.step_walking(now_ms),
            Mode::Falling => self.step_falling(now_ms),
            Mode::Fallen | Mode::Standing | Mode::Sleeping | Mode::Stretching => {
                self.settle_on_ground(now_ms)
            }
            Mode::Dragging => {}
        }
    }

    pub fn handle_event(&mut self, event: PetEvent, now_ms: u64) {
        match event {
            PetEvent::PointerDown { screen } => self.pointer_down(screen),
            PetEvent::PointerMove { screen } => self.pointer_move(screen),
            PetEvent::PointerUp => self.pointer_up(),
            PetEvent::AnimationCycleComplete { mode } => self.cycle_complete(mode, now_ms),
        }
    }

    /// Shift the rest position of the current mode onto the ground line.
    fn settle_on_ground(&mut self, now_ms: u64) {
        let target = self.state.resting_y(self.state.mode);
        if self.state.mode == Mode::Fallen || self.state.position.y != target {
            self.state.position.y = target;
            self.push_position(now_ms, false);
        }
    }

    fn step_walking(&mut self, now_ms: u64) {
        let screen_width = self.state.screen_bounds.width as f64;
        let max_x = screen_width - WINDOW_WIDTH as f64;

        self.state.position.y = self.state.ground_line;
        self.state.position.x += WALK_SPEED * self.state.direction.sign();

        if self.state.position.x + WINDOW_WIDTH as f64 >= screen_width {
            self.turn(Direction::Backward, now_ms);
            self.state.position.x = max_x;
        } else if self.state.position.x <= 0.0 {
            self.turn(Direction::Forward, now_ms);
            self.state.position.x = 0.0;
        }

        if now_ms > self.state.direction_change_deadline_ms
            && self.rng.gen_bool(DIRECTION_CHANGE_CHANCE)
        {
            let flipped = self.state.direction.flipped();
            self.turn(flipped, now_ms);
        }

        self.push_position(now_ms, false);
    }

    fn turn(&mut self, direction: Direction, now_ms: u64) {
        if self.state.direction != direction {
            tracing::debug!(to = direction.label(), "pet turned around");
        }
        self.state.direction = direction;
        self.state.reset_direction_timer(now_ms);
    }

    fn step_falling(&mut self, now_ms: u64) {
        self.state.vertical_velocity += GRAVITY;
        self.state.position.y += self.state.vertical_velocity;

        let floor = self.state.resting_y(Mode::Falling);
        if self.state.position.y >= floor {
            self.state.position.y = floor;
            self.state.vertical_velocity = 0.0;
            self.state.enter(Mode::Fallen);
            self.pending_recovery = Some(ScheduledRecovery {
                due_ms: now_ms + FALLEN_RECOVERY_DELAY_MS,
                epoch: self.state.epoch(),
            });
            self.push_position(now_ms, true);
        }

        self.push_position(now_ms, false);
    }

    fn fire_due_recovery(&mut self, now_ms: u64) {
        let Some(recovery) = self.pending_recovery else {
            return;
        };
        if now_ms < recovery.due_ms {
            return;
        }
        self.pending_recovery = None;
        if recovery.epoch != self.state.epoch() || self.state.mode != Mode::Fallen {
            tracing::debug!("fallen recovery skipped; pet was picked up again");
            return;
        }
        self.state.enter(Mode::Walking);
        self.state.position.y = self.state.ground_line;
        self.state.reset_direction_timer(now_ms);
    }

    fn run_idle_check(&mut self, now_ms: u64) {
        let Some(plan) = plan_idle(&mut self.rng, self.state.last_idle_mode) else {
            return;
        };
        let mode = plan.kind.mode();
        tracing::debug!(idle = %mode, cycles = plan.cycles, "pet going idle");
        self.state.last_idle_mode = Some(plan.kind);
        self.state.idle_cycles_remaining = plan.cycles;
        self.state.enter(mode);
        self.apply_footprint(mode);
        self.state.position.y = self.state.resting_y(mode);
        self.push_position(now_ms, true);
    }

    fn cycle_complete(&mut self, mode: Mode, now_ms: u64) {
        if !mode.is_idle() || mode != self.state.mode {
            return;
        }
        self.state.idle_cycles_remaining = self.state.idle_cycles_remaining.saturating_sub(1);
        if self.state.idle_cycles_remaining == 0 {
            self.state.enter(Mode::Walking);
            self.apply_footprint(Mode::Walking);
            self.state.reset_direction_timer(now_ms);
        } else {
            self.state.restart_animation();
        }
    }

    fn pointer_down(&mut self, screen: (f64, f64)) {
        if self.drag.is_active() {
            return;
        }
        if !hit_test(self.state.mode.footprint(), self.state.position, screen) {
            return;
        }
        if self.state.mode.is_idle() {
            self.state.idle_cycles_remaining = 0;
        }
        self.state.vertical_velocity = 0.0;
        self.state.enter(Mode::Dragging);
        self.apply_footprint(Mode::Dragging);
        self.drag.begin(screen, self.state.position);
    }

    fn pointer_move(&mut self, screen: (f64, f64)) {
        let Some(origin) = self.drag.origin_for(screen) else {
            return;
        };
        self.state.position = origin;
        let (x, y) = origin.rounded();
        self.host.set_window_position(x, y);
    }

    fn pointer_up(&mut self) {
        if !self.drag.end() {
            return;
        }
        match self.host.window_position() {
            Ok(origin) => self.state.position = Position::from(origin),
            Err(err) => {
                tracing::warn!(error = %err, "could not resync window position after drag");
            }
        }
        self.state.vertical_velocity = 0.0;
        self.state.enter(Mode::Falling);
        self.apply_footprint(Mode::Falling);
    }

    fn apply_footprint(&mut self, mode: Mode) {
        let size = mode.footprint().window_size();
        if size != self.window_size {
            self.window_size = size;
            self.host.set_window_size(size.0, size.1);
        }
    }

    fn push_position(&mut self, now_ms: u64, force: bool) {
        if self.throttle.admit(now_ms, force) {
            let (x, y) = self.state.position.rounded();
            self.host.set_window_position(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::host::{ScreenGeometry, WindowBounds};
    use anyhow::anyhow;

    #[derive(Default)]
    struct StubHost {
        position: Option<(i32, i32)>,
        moves: Vec<(i32, i32)>,
        sizes: Vec<(u32, u32)>,
    }

    impl HostWindow for StubHost {
        fn screen_geometry(&self) -> Result<ScreenGeometry> {
            Ok(ScreenGeometry {
                width: 1920,
                height: 1040,
            })
        }

        fn window_position(&self) -> Result<(i32, i32)> {
            self.position.ok_or_else(|| anyhow!("no position"))
        }

        fn set_window_position(&mut self, x: i32, y: i32) {
            self.moves.push((x, y));
        }

        fn set_window_size(&mut self, width: u32, height: u32) {
            self.sizes.push((width, height));
        }

        fn window_bounds(&self) -> Result<WindowBounds> {
            Err(anyhow!("unused"))
        }

        fn close(&mut self) {}
    }

    fn engine_at(x: i32) -> BehaviorEngine<StubHost, StdRng> {
        let host = StubHost {
            position: Some((x, 955)),
            ..Default::default()
        };
        BehaviorEngine::start_with_rng(host, StdRng::seed_from_u64(1), 0).unwrap()
    }

    #[test]
    fn startup_fails_without_initial_position() {
        let result = BehaviorEngine::start_with_rng(StubHost::default(), StdRng::seed_from_u64(1), 0);
        let err = result.err().expect("startup should fail");
        assert!(err.to_string().contains("initial window position"));
    }

    #[test]
    fn throttled_walk_skips_intermediate_frames() {
        let mut engine = engine_at(500);
        engine.step(16);
        engine.step(20);
        engine.step(40);
        assert_eq!(engine.host().moves, vec![(502, 955), (506, 955)]);
    }

    #[test]
    fn stale_cycle_events_are_ignored() {
        let mut engine = engine_at(500);
        engine.handle_event(
            PetEvent::AnimationCycleComplete {
                mode: Mode::Sleeping,
            },
            10,
        );
        assert_eq!(engine.mode(), Mode::Walking);
        assert_eq!(engine.state().idle_cycles_remaining, 0);
    }

    #[test]
    fn pointer_up_without_drag_is_ignored() {
        let mut engine = engine_at(500);
        engine.handle_event(PetEvent::PointerUp, 10);
        assert_eq!(engine.mode(), Mode::Walking);
    }
}
