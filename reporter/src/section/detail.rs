use battlefield_model::{Enemy, Scenario, ScenarioVariant};

use crate::analyze;
use crate::model::{EnemyDetail, FirstImageDetail};

/// How many enemies of the first image an urban report lists before cutting
/// off. Open-field reports list all of them.
pub const URBAN_DETAIL_CAP: usize = 5;

/// Builds the per-enemy detail of the first image, or `None` when the
/// document has no images.
pub fn first_image_detail(
    scenario: &Scenario,
    variant: ScenarioVariant,
) -> Option<FirstImageDetail> {
    let image = scenario.images.first()?;
    let cap = match variant {
        ScenarioVariant::Urban => URBAN_DETAIL_CAP,
        ScenarioVariant::OpenField => image.enemies.len(),
    };
    Some(FirstImageDetail {
        image_id: image.image_id.clone(),
        filename: image.filename.clone(),
        tactic_type: image.tactic_type.clone(),
        tactic_name: image.tactic_name.clone(),
        declared_enemy_count: image.enemy_count,
        enemies: image.enemies.iter().take(cap).map(enemy_detail).collect(),
        truncated: image.enemies.len().saturating_sub(cap),
    })
}

fn enemy_detail(enemy: &Enemy) -> EnemyDetail {
    // The loader rejects enemies without a lateral coordinate.
    let lateral = enemy.lateral().unwrap_or(0.0);
    let bearing = analyze::bearing_from_origin(enemy.x, lateral);
    EnemyDetail {
        id: enemy.id,
        kind: enemy.kind,
        x: enemy.x,
        lateral,
        speed: enemy.speed,
        direction: enemy.normalized_direction(),
        distance_from_origin: enemy.x.hypot(lateral),
        bearing,
        sector: analyze::bearing_sector(bearing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sector;
    use battlefield_model::{load_scenario, EnemyKind};
    use pretty_assertions::assert_eq;

    fn urban_with_enemies(count: usize) -> Scenario {
        let enemies = (0..count)
            .map(|index| {
                format!(
                    r#"{{"id": {id}, "type": "soldier", "x": {x}.0, "z": 4.0, "speed": 1.5, "direction": 370.0}}"#,
                    id = index + 1,
                    x = index
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        load_scenario(
            format!(
                r#"{{
                    "metadata": {{"version": "2.0", "imageSize": 640, "coordinateRange": 50, "totalImages": 1}},
                    "terrain": {{}},
                    "images": [{{
                        "imageId": "img_0001",
                        "filename": "urban_0001.png",
                        "type": "urban_combat",
                        "tacticType": "ambush",
                        "tacticNameCN": "伏击",
                        "enemyCount": {count},
                        "speedRange": {{"min": 1.0, "max": 5.0}},
                        "enemies": [{enemies}]
                    }}]
                }}"#
            )
            .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_should_compute_derived_values_for_each_enemy() {
        let scenario = load_scenario(
            r#"{
                "metadata": {"version": "1.0", "imageSize": 640, "coordinateRange": 30, "totalImages": 1},
                "images": [{
                    "imageId": "img_0001",
                    "filename": "battlefield_0001.png",
                    "type": "type1_sparse",
                    "enemyCount": 1,
                    "speedRange": {"min": 1.0, "max": 5.0},
                    "enemies": [{"type": "tank", "x": 3.0, "y": 4.0, "speed": 2.0, "direction": -90.0}]
                }]
            }"#
            .as_bytes(),
        )
        .unwrap();

        let detail = first_image_detail(&scenario, ScenarioVariant::OpenField).unwrap();
        assert_eq!(detail.enemies.len(), 1);
        let enemy = &detail.enemies[0];
        assert_eq!(enemy.kind, EnemyKind::Tank);
        assert_eq!(enemy.distance_from_origin, 5.0);
        assert_eq!(enemy.direction, 270.0);
        // atan2(3, 4) is about 36.9 degrees, the front-right sector.
        assert_eq!(enemy.sector, Sector::FrontRight);
    }

    #[test]
    fn test_should_cap_urban_detail_at_five_enemies() {
        let scenario = urban_with_enemies(7);
        let detail = first_image_detail(&scenario, ScenarioVariant::Urban).unwrap();
        assert_eq!(detail.enemies.len(), URBAN_DETAIL_CAP);
        assert_eq!(detail.truncated, 2);
        assert_eq!(detail.enemies[0].id, Some(1));
        assert_eq!(detail.tactic_type.as_deref(), Some("ambush"));
    }

    #[test]
    fn test_should_list_all_enemies_for_open_field() {
        let scenario = urban_with_enemies(7);
        let detail = first_image_detail(&scenario, ScenarioVariant::OpenField).unwrap();
        assert_eq!(detail.enemies.len(), 7);
        assert_eq!(detail.truncated, 0);
    }

    #[test]
    fn test_should_be_absent_without_images() {
        let scenario = load_scenario(
            r#"{
                "metadata": {"version": "1.0", "imageSize": 640, "coordinateRange": 30, "totalImages": 0},
                "images": []
            }"#
            .as_bytes(),
        )
        .unwrap();
        assert_eq!(
            first_image_detail(&scenario, ScenarioVariant::OpenField),
            None
        );
    }
}
