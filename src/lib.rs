pub mod app;
pub mod logging;
pub mod pet;
pub mod settings;
pub mod sprite;
