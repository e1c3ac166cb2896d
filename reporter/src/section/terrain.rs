use battlefield_model::{ObstacleKind, Scenario};
use itertools::Itertools;

use crate::model::TerrainSummary;

/// Counts the terrain features of a document, or `None` when the document
/// has no terrain section.
pub fn terrain_summary(scenario: &Scenario) -> Option<TerrainSummary> {
    let terrain = scenario.terrain.as_ref()?;
    let by_kind = terrain.obstacles.iter().counts_by(|obstacle| obstacle.kind);
    Some(TerrainSummary {
        buildings: terrain.buildings.len(),
        alleys: terrain.alleys.len(),
        obstacles: terrain.obstacles.len(),
        covers: by_kind.get(&ObstacleKind::Cover).copied().unwrap_or(0),
        barriers: by_kind.get(&ObstacleKind::Barrier).copied().unwrap_or(0),
        vehicles: by_kind.get(&ObstacleKind::Vehicle).copied().unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use battlefield_model::load_scenario;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_should_count_terrain_features() {
        let scenario = load_scenario(
            r#"{
                "metadata": {"version": "2.0", "imageSize": 640, "coordinateRange": 50, "totalImages": 0},
                "terrain": {
                    "buildings": [
                        {"id": 1, "x": 0.0, "z": 0.0, "width": 4.0, "depth": 3.0, "height": 6.0},
                        {"id": 2, "x": 9.0, "z": -4.0, "width": 5.0, "depth": 5.0, "height": 9.0}
                    ],
                    "alleys": [
                        {"id": 1, "start_x": 0.0, "start_z": -20.0, "end_x": 0.0, "end_z": 20.0, "width": 4.0, "length": 40.0}
                    ],
                    "obstacles": [
                        {"id": 1, "type": "Cover", "x": 1.0, "z": 1.0, "width": 1.0, "depth": 1.0, "rotation": 0.0},
                        {"id": 2, "type": "Cover", "x": 2.0, "z": 2.0, "width": 1.0, "depth": 1.0, "rotation": 0.0},
                        {"id": 3, "type": "Barrier", "x": 3.0, "z": 3.0, "width": 2.0, "depth": 0.5, "rotation": 45.0},
                        {"id": 4, "type": "vehicle", "x": 4.0, "z": 4.0, "width": 2.0, "depth": 4.5, "rotation": 90.0}
                    ]
                },
                "images": []
            }"#
            .as_bytes(),
        )
        .unwrap();

        assert_eq!(
            terrain_summary(&scenario),
            Some(TerrainSummary {
                buildings: 2,
                alleys: 1,
                obstacles: 4,
                covers: 2,
                barriers: 1,
                vehicles: 1,
            })
        );
    }

    #[test]
    fn test_should_be_absent_without_terrain() {
        let scenario = load_scenario(
            r#"{
                "metadata": {"version": "1.0", "imageSize": 640, "coordinateRange": 30, "totalImages": 0},
                "images": []
            }"#
            .as_bytes(),
        )
        .unwrap();
        assert_eq!(terrain_summary(&scenario), None);
    }

    #[test]
    fn test_should_count_empty_terrain_as_zeroes() {
        let scenario = load_scenario(
            r#"{
                "metadata": {"version": "2.0", "imageSize": 640, "coordinateRange": 50, "totalImages": 0},
                "terrain": {},
                "images": []
            }"#
            .as_bytes(),
        )
        .unwrap();
        assert_eq!(
            terrain_summary(&scenario),
            Some(TerrainSummary {
                buildings: 0,
                alleys: 0,
                obstacles: 0,
                covers: 0,
                barriers: 0,
                vehicles: 0,
            })
        );
    }
}
