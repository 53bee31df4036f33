use bevy::prelude::*;
use common::{Anchor, Scale, Size2};

use super::{
    colliders::{Collider, SyncMode},
    contacts::ContactTracker,
    error::CollisionError,
    evaluator::evaluate,
};

/// Transform of a sprite as the game layer sees it: `position` is where the
/// `anchor` point of a `size` box (before `scale`) sits, y growing downwards.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct GameTransform {
    pub position: Vec2,
    pub size: Size2,
    pub anchor: Anchor,
    pub scale: Scale,
}

impl GameTransform {
    pub fn new(position: Vec2, size: Size2) -> Self {
        Self {
            position,
            size,
            ..default()
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }
}

/// Entities whose colliders are checked against this entity's collider, in
/// priority order.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq, Reflect)]
pub struct OtherColliders(pub Vec<Entity>);

/// Opt-in per-entity contact memory. Holds the latest overlap result and turns
/// successive results into `ContactEvent`s.
#[derive(Component, Debug, Default)]
pub struct Contacts {
    latest: Vec<Entity>,
    tracker: ContactTracker<Entity>,
}

impl Contacts {
    /// Entities overlapping this one as of the last evaluation.
    pub fn current(&self) -> &[Entity] {
        &self.latest
    }

    /// Stores this frame's evaluation. A failed evaluation counts as no
    /// overlaps, so earlier contacts are reported as exited.
    fn record(&mut self, result: &Result<Vec<Entity>, CollisionError>) {
        match result {
            Ok(hits) => self.latest.clone_from(hits),
            Err(_) => self.latest.clear(),
        }
    }
}

/// Sent once per frame for every entity whose collider overlaps at least one
/// of its `OtherColliders`.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct CollidingEvent {
    pub entity: Entity,
    /// Overlapping entities, in `OtherColliders` order.
    pub others: Vec<Entity>,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    Entered { entity: Entity, other: Entity },
    Exited { entity: Entity, other: Entity },
}

#[derive(Bundle)]
pub struct ColliderBundle {
    pub collider: Collider,
    pub transform: GameTransform,
    pub others: OtherColliders,
}

impl ColliderBundle {
    pub fn new(collider: Collider, transform: GameTransform) -> Self {
        Self {
            collider,
            transform,
            others: OtherColliders::default(),
        }
    }

    pub fn colliding_with(mut self, others: Vec<Entity>) -> Self {
        self.others = OtherColliders(others);
        self
    }
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollisionSet;

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Collider>()
            .register_type::<GameTransform>()
            .register_type::<OtherColliders>()
            .add_event::<CollidingEvent>()
            .add_event::<ContactEvent>()
            .add_systems(
                Update,
                (
                    sync_auto_colliders,
                    evaluate_collisions,
                    track_contacts,
                    forget_orphaned_contacts,
                )
                    .chain()
                    .in_set(CollisionSet),
            );
    }
}

fn sync_auto_colliders(mut colliders: Query<(Entity, &mut Collider, &GameTransform)>) {
    for (entity, mut collider, transform) in &mut colliders {
        if collider.sync_mode != SyncMode::Auto {
            continue;
        }

        let size = transform.size.scaled(transform.scale);
        if let Err(err) = collider.update(transform.position, size, transform.anchor) {
            warn!(
                "collider '{}' on {:?} kept its previous shape: {}",
                collider.name, entity, err
            );
        }
    }
}

fn evaluate_collisions(
    subjects: Query<(Entity, &Collider, &OtherColliders)>,
    colliders: Query<&Collider>,
    mut contacts: Query<&mut Contacts>,
    mut events: EventWriter<CollidingEvent>,
) {
    for (entity, subject, others) in &subjects {
        let candidates = others
            .0
            .iter()
            .copied()
            .filter(|&other| other != entity)
            .filter_map(|other| colliders.get(other).ok().map(|collider| (other, collider)));

        let result = evaluate(subject, candidates);

        if let Ok(mut stored) = contacts.get_mut(entity) {
            stored.record(&result);
        }

        let hits = match result {
            Ok(hits) => hits,
            Err(err) => {
                error!("collision check for '{}' failed: {}", subject.name, err);
                continue;
            }
        };

        if !hits.is_empty() {
            events.send(CollidingEvent {
                entity,
                others: hits,
            });
        }
    }
}

fn track_contacts(mut tracked: Query<(Entity, &mut Contacts)>, mut events: EventWriter<ContactEvent>) {
    for (entity, mut contacts) in &mut tracked {
        let contacts = &mut *contacts;
        let diff = contacts.tracker.advance(&contacts.latest);

        for other in diff.exited {
            events.send(ContactEvent::Exited { entity, other });
        }
        for other in diff.entered {
            events.send(ContactEvent::Entered { entity, other });
        }
    }
}

/// Entities that stop listing `OtherColliders` are no longer evaluated; their
/// remembered contacts end here.
fn forget_orphaned_contacts(
    mut removed: RemovedComponents<OtherColliders>,
    mut tracked: Query<&mut Contacts>,
    mut events: EventWriter<ContactEvent>,
) {
    for entity in removed.read() {
        let Ok(mut contacts) = tracked.get_mut(entity) else {
            continue;
        };

        contacts.latest.clear();
        for other in contacts.tracker.clear() {
            events.send(ContactEvent::Exited { entity, other });
        }
    }
}
