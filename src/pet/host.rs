use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenGeometry {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Window operations the behaviour engine needs from whatever owns the
/// native window.
///
/// Queries may fail (the window system may not have reported yet); setters
/// are fire-and-forget.
pub trait HostWindow {
    fn screen_geometry(&self) -> Result<ScreenGeometry>;

    fn window_position(&self) -> Result<(i32, i32)>;

    fn set_window_position(&mut self, x: i32, y: i32);

    fn set_window_size(&mut self, width: u32, height: u32);

    fn window_bounds(&self) -> Result<WindowBounds>;

    fn close(&mut self);
}
