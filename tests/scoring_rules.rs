use bevy::prelude::*;

use prize_cannon::gameplay::scoring::{apply_hits, SessionState};
use prize_cannon::gameplay::target::{TargetOutcome, TargetResolved};
use prize_cannon::{GameConfig, Prize};

fn scoring_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.init_resource::<SessionState>();
    app.add_event::<TargetResolved>();
    app.add_systems(Update, apply_hits);
    app
}

fn resolve(app: &mut App, outcome: TargetOutcome) {
    app.world_mut().send_event(TargetResolved { outcome });
}

#[test]
fn three_matching_hits_pay_the_bonus() {
    let mut app = scoring_app();
    let star = Prize::catalog()[0];
    for _ in 0..3 {
        resolve(&mut app, TargetOutcome::Hit(star));
    }
    app.update();

    let session = app.world().resource::<SessionState>();
    assert_eq!(session.score, 130);
    assert!(session.prizes.is_empty());
}

#[test]
fn explode_and_miss_do_not_score() {
    let mut app = scoring_app();
    resolve(&mut app, TargetOutcome::Explode);
    resolve(&mut app, TargetOutcome::Miss);
    app.update();

    let session = app.world().resource::<SessionState>();
    assert_eq!(session.score, 0);
    assert!(session.prizes.is_empty());
}

#[test]
fn hits_after_game_over_are_ignored() {
    let mut app = scoring_app();
    app.world_mut().resource_mut::<SessionState>().game_over = true;

    resolve(&mut app, TargetOutcome::Hit(Prize::catalog()[1]));
    app.update();

    let session = app.world().resource::<SessionState>();
    assert_eq!(session.score, 0);
    assert!(session.prizes.is_empty());
}
