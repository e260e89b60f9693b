pub mod animation;
pub mod clock;
pub mod drag;
pub mod engine;
pub mod host;
pub mod idle;
pub mod messages;
pub mod model;
pub mod state;
pub mod throttle;

pub use engine::BehaviorEngine;
pub use host::{HostWindow, ScreenGeometry, WindowBounds};
pub use messages::PetEvent;
pub use model::{Direction, IdleKind, Mode};
