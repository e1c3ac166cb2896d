use std::collections::HashMap;
use std::hash::Hash;

use crate::model::Sector;

/// Arithmetic mean, or `None` for an empty input.
pub(crate) fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

/// The item with the largest key. Ties keep the earliest item, so results
/// are stable under document order.
pub(crate) fn max_by_key_first<T, F>(items: impl IntoIterator<Item = T>, key: F) -> Option<T>
where
    F: Fn(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for item in items {
        let value = key(&item);
        let better = match &best {
            None => true,
            Some((_, best_value)) => value > *best_value,
        };
        if better {
            best = Some((item, value));
        }
    }
    best.map(|(item, _)| item)
}

/// Groups items by key, preserving the order in which keys are first seen.
pub(crate) fn group_in_order<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();
    for item in items {
        let k = key(&item);
        match positions.get(&k) {
            Some(&position) => groups[position].1.push(item),
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }
    groups
}

/// Bearing of a ground position as seen from the observer at the origin:
/// degrees in [0, 360), zero along the forward axis, clockwise positive.
pub(crate) fn bearing_from_origin(x: f64, forward: f64) -> f64 {
    x.atan2(forward).to_degrees().rem_euclid(360.0)
}

const SECTORS: [Sector; 8] = [
    Sector::Ahead,
    Sector::FrontRight,
    Sector::Right,
    Sector::RearRight,
    Sector::Behind,
    Sector::RearLeft,
    Sector::Left,
    Sector::FrontLeft,
];

/// Snaps a bearing to the nearest 45 degree sector.
pub(crate) fn bearing_sector(bearing: f64) -> Sector {
    let index = (bearing.rem_euclid(360.0) / 45.0).round() as usize % SECTORS.len();
    SECTORS[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_should_compute_mean() {
        assert_eq!(mean([2.0, 4.0]), Some(3.0));
        assert_eq!(mean([6.0]), Some(6.0));
        assert_eq!(mean([]), None);
    }

    #[test]
    fn test_should_keep_first_item_on_tied_max() {
        let items = [("a", 2.0), ("b", 5.0), ("c", 5.0), ("d", 1.0)];
        let best = max_by_key_first(items.iter(), |(_, value)| *value);
        assert_eq!(best, Some(&("b", 5.0)));
    }

    #[test]
    fn test_should_return_none_for_empty_max() {
        let best = max_by_key_first(std::iter::empty::<f64>(), |value| *value);
        assert_eq!(best, None);
    }

    #[test]
    fn test_should_group_in_first_seen_order() {
        let groups = group_in_order(["b", "a", "b", "c", "a"], |item| *item);
        assert_eq!(
            groups,
            vec![
                ("b", vec!["b", "b"]),
                ("a", vec!["a", "a"]),
                ("c", vec!["c"]),
            ]
        );
    }

    #[test]
    fn test_should_compute_bearing_on_the_axes() {
        assert_eq!(bearing_from_origin(0.0, 10.0), 0.0);
        assert_eq!(bearing_from_origin(10.0, 0.0), 90.0);
        assert_eq!(bearing_from_origin(0.0, -10.0), 180.0);
        assert_eq!(bearing_from_origin(-10.0, 0.0), 270.0);
    }

    #[test]
    fn test_should_snap_bearing_to_sector() {
        assert_eq!(bearing_sector(0.0), Sector::Ahead);
        assert_eq!(bearing_sector(45.0), Sector::FrontRight);
        assert_eq!(bearing_sector(90.0), Sector::Right);
        assert_eq!(bearing_sector(135.0), Sector::RearRight);
        assert_eq!(bearing_sector(180.0), Sector::Behind);
        assert_eq!(bearing_sector(225.0), Sector::RearLeft);
        assert_eq!(bearing_sector(270.0), Sector::Left);
        assert_eq!(bearing_sector(315.0), Sector::FrontLeft);
        // Sector boundaries snap to the nearest label, wrapping at north.
        assert_eq!(bearing_sector(22.4), Sector::Ahead);
        assert_eq!(bearing_sector(22.6), Sector::FrontRight);
        assert_eq!(bearing_sector(337.6), Sector::Ahead);
    }
}
