pub mod camera;
pub mod hud;
