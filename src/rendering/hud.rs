use bevy::prelude::*;

use crate::gameplay::scoring::SessionState;

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct PrizeText;

#[derive(Component)]
struct GameOverText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud)
            .add_systems(Update, update_hud);
    }
}

fn setup_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                ScoreText,
                Text::new("Score: 0"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                PrizeText,
                Text::new(""),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                GameOverText,
                Text::new(""),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.94, 0.27, 0.27)),
            ));
        });
}

fn update_hud(
    session: Res<SessionState>,
    mut q_score: Query<&mut Text, With<ScoreText>>,
    mut q_prizes: Query<&mut Text, (With<PrizeText>, Without<ScoreText>)>,
    mut q_over: Query<&mut Text, (With<GameOverText>, Without<ScoreText>, Without<PrizeText>)>,
) {
    if !session.is_changed() {
        return;
    }
    if let Ok(mut text) = q_score.single_mut() {
        text.0 = format!("Score: {}", session.score);
    }
    if let Ok(mut text) = q_prizes.single_mut() {
        text.0 = session.prizes.as_slice().iter().map(|p| p.symbol).collect();
    }
    if let Ok(mut text) = q_over.single_mut() {
        text.0 = if session.game_over {
            "GAME OVER (press R to restart)".to_string()
        } else {
            String::new()
        };
    }
}
