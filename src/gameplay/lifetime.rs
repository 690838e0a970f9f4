use bevy::prelude::*;

/// Self-expiry for transient bodies (projectiles, explosion particles).
/// The entity is removed when the timer runs out, whatever else happened
/// to it in the meantime.
#[derive(Component, Debug)]
pub struct Lifetime {
    timer: Timer,
}

impl Lifetime {
    pub fn new(secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(secs, TimerMode::Once),
        }
    }

    pub fn remaining_secs(&self) -> f32 {
        self.timer.remaining_secs()
    }
}

pub fn expire_lifetimes(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut Lifetime)>,
) {
    for (entity, mut lifetime) in q.iter_mut() {
        lifetime.timer.tick(time.delta());
        if lifetime.timer.finished() {
            commands.entity(entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, expire_lifetimes);

        let e = app.world_mut().spawn(Lifetime::new(0.0)).id();
        app.update();
        assert!(app.world().get_entity(e).is_err());
    }

    #[test]
    fn survives_before_ttl() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, expire_lifetimes);

        let e = app.world_mut().spawn(Lifetime::new(60.0)).id();
        app.update();
        app.update();
        assert!(app.world().get_entity(e).is_ok());
    }
}
