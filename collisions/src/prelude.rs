pub use super::ALL_LAYERS;
pub use crate::colliders::{Collider, SyncMode};
pub use crate::contacts::{ContactDiff, ContactTracker};
pub use crate::error::CollisionError;
pub use crate::evaluator::{evaluate, evaluate_any};
pub use crate::plugin::{
    ColliderBundle, CollidingEvent, CollisionPlugin, CollisionSet, ContactEvent, Contacts,
    GameTransform, OtherColliders,
};
pub use crate::prefab::{ColliderPrefab, PrefabError};
pub use crate::shapes::{Shape, ShapeKind};
pub use common::{Anchor, FRect, Scale, Size2};
