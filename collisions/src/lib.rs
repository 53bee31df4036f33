//! 2D collision core for sprites: shapes, colliders bound to an entity's
//! transform, a per-frame overlap evaluator and a Bevy plugin driving them.

pub mod colliders;
pub mod contacts;
pub mod error;
pub mod evaluator;
pub mod plugin;
pub mod prefab;
pub mod prelude;
pub mod shapes;

/// Layer mask accepting every layer.
pub const ALL_LAYERS: i32 = -1;
