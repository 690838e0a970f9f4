pub mod app;
pub mod core;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::app::state::AppState;
pub use crate::core::components::{Prize, SimBody};
pub use crate::core::config::{ConfigLoadNote, GameConfig, WindowConfig};
pub use crate::core::rng::SessionRng;
pub use crate::gameplay::scoring::{PrizeQueue, SessionState};
