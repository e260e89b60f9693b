use anyhow::{anyhow, Result};
use eframe::egui;
use std::collections::HashMap;
use std::path::Path;

use crate::pet::animation::{animation_for, SpriteAnimator};
use crate::pet::clock::FrameClock;
use crate::pet::{BehaviorEngine, Direction, HostWindow, Mode, PetEvent, ScreenGeometry, WindowBounds};
use crate::settings::Settings;
use crate::sprite::png_dimensions;

/// Frames to wait for the window system to report monitor and window
/// geometry before giving up on startup.
const STARTUP_FRAME_BUDGET: u32 = 120;
/// Frames to wait for the initial placement to show up in `outer_rect`.
const PLACEMENT_GRACE_FRAMES: u32 = 10;

/// [`HostWindow`] backed by the eframe viewport the pet lives in.
pub struct EguiHost {
    ctx: egui::Context,
}

impl EguiHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl HostWindow for EguiHost {
    fn screen_geometry(&self) -> Result<ScreenGeometry> {
        let size = self
            .ctx
            .input(|i| i.viewport().monitor_size)
            .ok_or_else(|| anyhow!("monitor size not reported yet"))?;
        Ok(ScreenGeometry {
            width: size.x.round() as u32,
            height: size.y.round() as u32,
        })
    }

    fn window_position(&self) -> Result<(i32, i32)> {
        let bounds = self.window_bounds()?;
        Ok((bounds.x, bounds.y))
    }

    fn set_window_position(&mut self, x: i32, y: i32) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
                x as f32, y as f32,
            )));
    }

    fn set_window_size(&mut self, width: u32, height: u32) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                width as f32,
                height as f32,
            )));
    }

    fn window_bounds(&self) -> Result<WindowBounds> {
        let rect = self
            .ctx
            .input(|i| i.viewport().outer_rect)
            .ok_or_else(|| anyhow!("window position not reported yet"))?;
        Ok(WindowBounds {
            x: rect.min.x.round() as i32,
            y: rect.min.y.round() as i32,
            width: rect.width().round() as u32,
            height: rect.height().round() as u32,
        })
    }

    fn close(&mut self) {
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

/// One horizontal frame strip per mode.
#[derive(Default)]
struct SpriteSheets {
    textures: HashMap<Mode, egui::TextureHandle>,
}

impl SpriteSheets {
    fn load(ctx: &egui::Context, dir: &Path) -> Self {
        let mut textures = HashMap::new();
        for mode in Mode::ALL {
            let path = dir.join(format!("{}.png", mode.label()));
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no sprite sheet; using placeholder");
                continue;
            }
            if png_dimensions(&path).is_none() {
                continue;
            }
            match image::open(&path) {
                Ok(img) => {
                    let size = [img.width() as usize, img.height() as usize];
                    let rgba = img.to_rgba8();
                    let texture = ctx.load_texture(
                        mode.label(),
                        egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()),
                        egui::TextureOptions::NEAREST,
                    );
                    textures.insert(mode, texture);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to decode sprite sheet");
                }
            }
        }
        tracing::info!(loaded = textures.len(), dir = %dir.display(), "sprite sheets loaded");
        Self { textures }
    }

    fn paint(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        mode: Mode,
        direction: Direction,
        frame: u32,
    ) {
        let Some(texture) = self.textures.get(&mode) else {
            paint_placeholder(painter, rect, mode, direction);
            return;
        };
        let frames = animation_for(mode).frames.max(1) as f32;
        let u0 = frame as f32 / frames;
        let u1 = (frame + 1) as f32 / frames;
        let uv = match direction {
            Direction::Forward => egui::Rect::from_min_max(egui::pos2(u0, 0.0), egui::pos2(u1, 1.0)),
            Direction::Backward => egui::Rect::from_min_max(egui::pos2(u1, 0.0), egui::pos2(u0, 1.0)),
        };
        painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
    }
}

fn paint_placeholder(painter: &egui::Painter, rect: egui::Rect, mode: Mode, direction: Direction) {
    let body = rect.shrink(4.0);
    painter.rect_filled(body, 12.0, egui::Color32::from_rgb(0xC0, 0x6C, 0x84));
    if mode == Mode::Sleeping {
        return;
    }
    let eye_x = match direction {
        Direction::Forward => body.right() - 14.0,
        Direction::Backward => body.left() + 14.0,
    };
    painter.circle_filled(egui::pos2(eye_x, body.top() + 18.0), 3.0, egui::Color32::BLACK);
}

pub const ABOUT_TEXT: &str =
    "Desktop Pet\nA small friend who walks along the bottom of your screen.\nDrag it around and it falls back down.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowAbout,
    CloseAbout,
    Terminate,
}

/// What the context menu and the About dialog have asked for so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub show_about: bool,
    pub quit_requested: bool,
}

impl MenuState {
    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::ShowAbout => self.show_about = true,
            MenuAction::CloseAbout => self.show_about = false,
            MenuAction::Terminate => {
                self.show_about = false;
                self.quit_requested = true;
            }
        }
    }
}

fn about_contents(ui: &mut egui::Ui) -> Option<MenuAction> {
    for line in ABOUT_TEXT.lines() {
        ui.label(line);
    }
    ui.separator();
    if ui.button("Close").clicked() {
        return Some(MenuAction::CloseAbout);
    }
    None
}

/// The pet window is too small for a dialog, so About gets its own viewport.
fn show_about(ctx: &egui::Context, menu: &mut MenuState) {
    if !menu.show_about {
        return;
    }
    let action = ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("desktop_pet_about"),
        egui::ViewportBuilder::default()
            .with_title("About")
            .with_inner_size([320.0, 120.0])
            .with_always_on_top(),
        |ctx, class| {
            if class == egui::ViewportClass::Embedded {
                return egui::Window::new("About")
                    .collapsible(false)
                    .resizable(false)
                    .show(ctx, about_contents)
                    .and_then(|r| r.inner.flatten());
            }
            let clicked = egui::CentralPanel::default()
                .show(ctx, about_contents)
                .inner;
            if ctx.input(|i| i.viewport().close_requested()) {
                return Some(MenuAction::CloseAbout);
            }
            clicked
        },
    );
    if let Some(action) = action {
        menu.apply(action);
    }
}

enum Phase {
    Starting {
        frames_waited: u32,
        placed: Option<(i32, i32)>,
    },
    Running(BehaviorEngine<EguiHost>),
    Stopped,
}

pub struct PetApp {
    settings: Settings,
    clock: FrameClock,
    phase: Phase,
    animator: SpriteAnimator,
    sprites: SpriteSheets,
    menu: MenuState,
}

impl PetApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let sprites = SpriteSheets::load(&cc.egui_ctx, &settings.sprite_dir());
        Self {
            settings,
            clock: FrameClock::new(),
            phase: Phase::Starting {
                frames_waited: 0,
                placed: None,
            },
            animator: SpriteAnimator::new(),
            sprites,
            menu: MenuState::default(),
        }
    }

    fn advance_startup(&mut self, ctx: &egui::Context) {
        let (frames_waited, mut placed) = match &self.phase {
            Phase::Starting {
                frames_waited,
                placed,
            } => (*frames_waited + 1, *placed),
            _ => return,
        };

        let mut host = EguiHost::new(ctx.clone());
        if placed.is_none() {
            if let Ok(screen) = host.screen_geometry() {
                let start = self.settings.start_position((screen.width, screen.height));
                host.set_window_position(start.0, start.1);
                placed = Some(start);
            }
        }

        let settled = match (placed, host.window_position()) {
            (Some(target), Ok(pos)) => pos == target || frames_waited >= PLACEMENT_GRACE_FRAMES,
            _ => false,
        };

        if settled || frames_waited >= STARTUP_FRAME_BUDGET {
            self.phase = match BehaviorEngine::start(host, self.clock.now_ms()) {
                Ok(engine) => Phase::Running(engine),
                Err(e) => {
                    tracing::error!(error = %e, "failed to start desktop pet");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    Phase::Stopped
                }
            };
        } else {
            self.phase = Phase::Starting {
                frames_waited,
                placed,
            };
        }
    }
}

/// Translate this frame's pointer input into engine events.
fn pointer_events(ctx: &egui::Context, fallback_origin: (f64, f64), dragging: bool) -> Vec<PetEvent> {
    let (pressed, released, moved, latest, origin) = ctx.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.delta() != egui::Vec2::ZERO,
            i.pointer.latest_pos(),
            i.viewport().inner_rect.map(|r| r.min),
        )
    });
    let origin = origin
        .map(|o| (o.x as f64, o.y as f64))
        .unwrap_or(fallback_origin);
    let screen = latest.map(|p| (origin.0 + p.x as f64, origin.1 + p.y as f64));

    let mut events = Vec::new();
    if let Some(screen) = screen {
        if pressed {
            events.push(PetEvent::PointerDown { screen });
        } else if dragging && moved {
            events.push(PetEvent::PointerMove { screen });
        }
    }
    if released {
        events.push(PetEvent::PointerUp);
    }
    events
}

impl eframe::App for PetApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_startup(ctx);

        let Phase::Running(engine) = &mut self.phase else {
            ctx.request_repaint();
            return;
        };

        let now = self.clock.now_ms();
        let position = engine.position();
        for event in pointer_events(ctx, (position.x, position.y), engine.is_dragging()) {
            engine.handle_event(event, now);
        }

        engine.step(now);

        let mode = engine.mode();
        let frame = self
            .animator
            .advance(mode, engine.state().animation_restarts(), now);
        if frame.cycle_completed {
            engine.handle_event(PetEvent::AnimationCycleComplete { mode }, now);
        }

        let mode = engine.mode();
        let direction = engine.state().direction;
        let footprint = mode.footprint();
        let sprites = &self.sprites;
        let menu = &mut self.menu;
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(footprint.sprite_width as f32, footprint.sprite_height as f32),
                );
                sprites.paint(ui.painter(), rect, mode, direction, frame.frame);
                let response = ui.interact(rect, egui::Id::new("desktop_pet"), egui::Sense::click());
                response.context_menu(|ui| {
                    ui.label("Desktop Pet");
                    ui.separator();
                    if ui.button("About").clicked() {
                        menu.apply(MenuAction::ShowAbout);
                        ui.close_menu();
                    }
                    if ui.button("Terminate").clicked() {
                        menu.apply(MenuAction::Terminate);
                        ui.close_menu();
                    }
                });
            });

        show_about(ctx, menu);

        if menu.quit_requested {
            tracing::info!("terminate requested from context menu");
            engine.host_mut().close();
        }

        ctx.request_repaint();
    }
}
