use battlefield_model::{EnemyKind, Scenario};
use itertools::Itertools;

use crate::model::ImageSummary;

/// Builds one listing row per image, in document order.
pub fn image_listing(scenario: &Scenario) -> Vec<ImageSummary> {
    scenario
        .images
        .iter()
        .map(|image| {
            let by_kind = image.enemies.iter().counts_by(|enemy| enemy.kind);
            ImageSummary {
                image_id: image.image_id.clone(),
                filename: image.filename.clone(),
                type_tag: image.type_tag.clone(),
                tactic_type: image.tactic_type.clone(),
                tactic_name: image.tactic_name.clone(),
                declared_enemy_count: image.enemy_count,
                soldiers: by_kind.get(&EnemyKind::Soldier).copied().unwrap_or(0),
                tanks: by_kind.get(&EnemyKind::Tank).copied().unwrap_or(0),
                drones: by_kind.get(&EnemyKind::Drone).copied().unwrap_or(0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use battlefield_model::load_scenario;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_should_count_listed_enemies_by_kind() {
        let scenario = load_scenario(
            r#"{
                "metadata": {"version": "1.0", "imageSize": 640, "coordinateRange": 30, "totalImages": 1},
                "images": [{
                    "imageId": "img_0001",
                    "filename": "battlefield_0001.png",
                    "type": "type2_normal",
                    "enemyCount": 4,
                    "speedRange": {"min": 1.0, "max": 5.0},
                    "enemies": [
                        {"type": "soldier", "x": 1.0, "y": 1.0, "speed": 1.5, "direction": 10.0},
                        {"type": "soldier", "x": 2.0, "y": 2.0, "speed": 1.6, "direction": 20.0},
                        {"type": "tank", "x": 3.0, "y": 3.0, "speed": 3.0, "direction": 30.0},
                        {"type": "drone", "x": 4.0, "y": 4.0, "speed": 8.0, "direction": 40.0}
                    ]
                }]
            }"#
            .as_bytes(),
        )
        .unwrap();

        let listing = image_listing(&scenario);
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].image_id, "img_0001");
        assert_eq!(listing[0].declared_enemy_count, 4);
        assert_eq!(listing[0].soldiers, 2);
        assert_eq!(listing[0].tanks, 1);
        assert_eq!(listing[0].drones, 1);
    }

    #[test]
    fn test_should_surface_declared_count_even_when_it_disagrees() {
        // The row echoes the declared count; the consistency scan flags it.
        let scenario = load_scenario(
            r#"{
                "metadata": {"version": "1.0", "imageSize": 640, "coordinateRange": 30, "totalImages": 1},
                "images": [{
                    "imageId": "img_0001",
                    "filename": "a.png",
                    "type": "type1_sparse",
                    "enemyCount": 9,
                    "speedRange": {"min": 1.0, "max": 5.0},
                    "enemies": [{"type": "soldier", "x": 1.0, "y": 1.0, "speed": 1.0, "direction": 0.0}]
                }]
            }"#
            .as_bytes(),
        )
        .unwrap();

        let listing = image_listing(&scenario);
        assert_eq!(listing[0].declared_enemy_count, 9);
        assert_eq!(listing[0].soldiers, 1);
    }

    #[test]
    fn test_should_be_empty_for_document_without_images() {
        let scenario = load_scenario(
            r#"{
                "metadata": {"version": "1.0", "imageSize": 640, "coordinateRange": 30, "totalImages": 0},
                "images": []
            }"#
            .as_bytes(),
        )
        .unwrap();
        assert_eq!(image_listing(&scenario), vec![]);
    }
}
