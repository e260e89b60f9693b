use crate::pet::model::Mode;

/// Inputs delivered to the engine between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PetEvent {
    /// Primary button pressed, in screen coordinates.
    PointerDown { screen: (f64, f64) },
    PointerMove { screen: (f64, f64) },
    PointerUp,
    /// The visual layer finished one repetition of `mode`'s animation.
    AnimationCycleComplete { mode: Mode },
}
