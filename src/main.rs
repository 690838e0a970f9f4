use bevy::prelude::*;

use prize_cannon::{ConfigLoadNote, GameConfig, GamePlugin};

fn main() {
    // Defaults cover a missing or broken config file; the note is logged
    // once logging is up.
    let (cfg, note) = GameConfig::load_or_default("assets/config/game.ron");

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigLoadNote(note))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();
}
