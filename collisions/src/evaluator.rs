//! Per-frame overlap scan of one collider against an ordered list of others.
//!
//! The scan is a plain O(N) loop with no spatial acceleration. For large scenes
//! the caller is expected to pre-filter `others` (by proximity, by layer, ...)
//! before calling in; nothing here will do it for them.

use super::{colliders::Collider, error::CollisionError};

/// Returns the keys of every collider in `others` that overlaps `subject`, in
/// the order they were supplied. Keeps no state between calls: diffing
/// successive results is up to the caller (see `ContactTracker`).
pub fn evaluate<'a, K, I>(subject: &Collider, others: I) -> Result<Vec<K>, CollisionError>
where
    I: IntoIterator<Item = (K, &'a Collider)>,
{
    let mut hits = Vec::new();

    if subject.shape.is_none() {
        return Ok(hits);
    }

    for (key, other) in others {
        if subject.overlaps(other)? {
            hits.push(key);
        }
    }

    Ok(hits)
}

/// Like [`evaluate`] but stops at the first overlapping collider.
pub fn evaluate_any<'a, K, I>(subject: &Collider, others: I) -> Result<Option<K>, CollisionError>
where
    I: IntoIterator<Item = (K, &'a Collider)>,
{
    for (key, other) in others {
        if subject.overlaps(other)? {
            return Ok(Some(key));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;
    use common::{Anchor, Size2};

    fn placed(name: &str, x: f32) -> Collider {
        let mut collider = Collider::boxed(name);
        collider
            .update(Vec2::new(x, 0.0), Size2::splat(10.0), Anchor::TopLeft)
            .unwrap();
        collider
    }

    #[test]
    fn empty_others_yields_nothing() {
        let subject = placed("subject", 0.0);
        let others: Vec<(usize, &Collider)> = Vec::new();

        assert_eq!(evaluate(&subject, others), Ok(Vec::<usize>::new()));
        assert_eq!(evaluate_any(&subject, Vec::<(usize, &Collider)>::new()), Ok(None));
    }

    #[test]
    fn keeps_caller_order() {
        let subject = placed("subject", 0.0);
        let far = placed("far", 50.0);
        let right = placed("right", 5.0);
        let left = placed("left", -5.0);
        let touching = placed("touching", 10.0);

        let others = [(3, &right), (1, &far), (7, &left), (2, &touching)];
        assert_eq!(evaluate(&subject, others), Ok(vec![3, 7]));

        let reversed = [(7, &left), (3, &right)];
        assert_eq!(evaluate(&subject, reversed), Ok(vec![7, 3]));
        assert_eq!(evaluate_any(&subject, reversed), Ok(Some(7)));
    }

    #[test]
    fn unplaced_subject_hits_nothing() {
        let subject = Collider::circle("ghost");
        let other = placed("other", 0.0);
        assert_eq!(evaluate(&subject, [("other", &other)]), Ok(vec![]));
    }

    #[test]
    fn names_can_serve_as_keys() {
        let subject = placed("subject", 0.0);
        let others = [placed("a", 1.0), placed("b", 30.0), placed("c", -1.0)];

        let hits = evaluate(&subject, others.iter().map(|c| (c.name.as_str(), c))).unwrap();
        assert_eq!(hits, vec!["a", "c"]);
    }
}
