use std::time::Duration;

use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use collisions::prelude::*;
use rand::Rng;

const PREFABS: &str = r#"[
    { "name": "player", "shape": "Box", "anchor": "Center" },
    { "name": "coin", "shape": "Circle", "size": { "width": 8.0, "height": 8.0 }, "anchor": "Center" },
    { "name": "wall", "shape": "Box", "sync_mode": "Manual", "anchor": "Center" }
]"#;

const COINS: usize = 5;
const FRAMES: u32 = 600;

#[derive(Component, Debug)]
struct Velocity(Vec2);

fn main() -> AppExit {
    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
            LogPlugin::default(),
            CollisionPlugin,
        ))
        .add_systems(Startup, spawn_scene)
        .add_systems(
            Update,
            (
                move_bodies.before(CollisionSet),
                (react_to_contacts, stop_after_frames).after(CollisionSet),
            ),
        )
        .run()
}

fn spawn_scene(mut commands: Commands) {
    if let Err(err) = try_spawn_scene(&mut commands) {
        error!("Could not set up the scene: {}", err);
    }
}

fn try_spawn_scene(commands: &mut Commands) -> Result<(), PrefabError> {
    let prefabs = ColliderPrefab::list_from_json(PREFABS)?;
    let player = ColliderPrefab::find(&prefabs, "player")?;
    let coin = ColliderPrefab::find(&prefabs, "coin")?;
    let wall = ColliderPrefab::find(&prefabs, "wall")?;

    let mut rng = rand::thread_rng();
    let mut others = Vec::with_capacity(COINS + 1);

    for i in 0..COINS {
        let position = Vec2::new(60.0 * (i + 1) as f32, rng.gen_range(-8.0..8.0));
        let id = commands
            .spawn((
                coin.build()?,
                GameTransform::new(position, Size2::splat(12.0)),
            ))
            .id();
        others.push(id);
    }

    // wall geometry is decoupled from its sprite: placed once, never synced
    let mut wall_collider = wall.build()?;
    let wall_position = Vec2::new(400.0, 0.0);
    if let Err(err) = wall_collider.update(wall_position, Size2::new(20.0, 200.0), Anchor::Center) {
        warn!("wall collider was not placed: {}", err);
    }
    others.push(
        commands
            .spawn((
                wall_collider,
                GameTransform::new(wall_position, Size2::new(32.0, 240.0)),
            ))
            .id(),
    );

    commands.spawn((
        ColliderBundle::new(
            player.build()?,
            GameTransform::new(Vec2::ZERO, Size2::splat(16.0)),
        )
        .colliding_with(others),
        Contacts::default(),
        Velocity(Vec2::new(120.0, 0.0)),
    ));

    info!("Spawned player, {} coins and a wall", COINS);
    Ok(())
}

fn move_bodies(time: Res<Time>, mut bodies: Query<(&Velocity, &mut GameTransform)>) {
    for (velocity, mut transform) in &mut bodies {
        transform.position += velocity.0 * time.delta_seconds();
    }
}

fn react_to_contacts(
    mut commands: Commands,
    mut contacts: EventReader<ContactEvent>,
    colliders: Query<&Collider>,
    mut bodies: Query<&mut Velocity>,
) {
    for event in contacts.read() {
        match *event {
            ContactEvent::Entered { entity, other } => {
                let Ok(other_collider) = colliders.get(other) else {
                    continue;
                };

                info!("{:?} touched '{}'", entity, other_collider.name);
                match other_collider.name.as_str() {
                    "coin" => commands.entity(other).despawn(),
                    "wall" => {
                        if let Ok(mut velocity) = bodies.get_mut(entity) {
                            velocity.0 = -velocity.0;
                        }
                    }
                    _ => {}
                }
            }
            ContactEvent::Exited { entity, other } => {
                debug!("{:?} left {:?}", entity, other);
            }
        }
    }
}

fn stop_after_frames(mut frames: Local<u32>, mut exit: EventWriter<AppExit>) {
    *frames += 1;
    if *frames >= FRAMES {
        info!("Stopping after {} frames", *frames);
        exit.send(AppExit::Success);
    }
}
