use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::chart::ChartPoint;

/// A point label with its collision-adjusted radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPoint {
    pub name: String,
    pub longitude: f64,
    /// How many earlier points share this point's degree bucket
    pub level: usize,
    /// Radius in wheel units
    pub radius: f32,
}

/// Place point labels on a ring, fanning collisions inward.
///
/// Points are taken in ascending longitude (ties keep chart order) and
/// bucketed by whole degree. Each further point in a bucket moves `step`
/// closer to the centre.
pub fn stack_points(points: &[ChartPoint], base_radius: f32, step: f32) -> Vec<PlacedPoint> {
    let mut ordered: Vec<&ChartPoint> = points.iter().collect();
    ordered.sort_by(|a, b| a.longitude.total_cmp(&b.longitude));

    let mut buckets: HashMap<i64, usize> = HashMap::new();
    ordered
        .into_iter()
        .map(|point| {
            let bucket = buckets.entry(point.longitude.floor() as i64).or_insert(0);
            let level = *bucket;
            *bucket += 1;
            PlacedPoint {
                name: point.name.clone(),
                longitude: point.longitude,
                level,
                radius: base_radius - level as f32 * step,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, longitude: f64) -> ChartPoint {
        ChartPoint::derived(name, longitude)
    }

    #[test]
    fn same_degree_fans_inward() {
        let points = vec![point("A", 10.7), point("B", 10.2), point("C", 10.9)];
        let placed = stack_points(&points, 1.05, 0.07);
        let names: Vec<&str> = placed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(placed[0].level, 0);
        assert_eq!(placed[1].level, 1);
        assert_eq!(placed[2].level, 2);
        assert_eq!(placed[0].radius, 1.05);
        assert!((placed[2].radius - (1.05 - 0.14)).abs() < 1e-6);
    }

    #[test]
    fn neighbouring_degrees_do_not_collide() {
        let points = vec![point("A", 10.9), point("B", 11.1)];
        let placed = stack_points(&points, 1.0, 0.1);
        assert!(placed.iter().all(|p| p.level == 0));
    }

    #[test]
    fn ties_keep_chart_order() {
        let points = vec![point("X", 5.0), point("Y", 5.0)];
        let placed = stack_points(&points, 1.0, 0.1);
        assert_eq!(placed[0].name, "X");
        assert_eq!(placed[1].name, "Y");
        assert_eq!(placed[1].level, 1);
    }

    #[test]
    fn empty_input_places_nothing() {
        assert!(stack_points(&[], 1.0, 0.1).is_empty());
    }
}
