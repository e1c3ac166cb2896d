use battlefield_model::{Building, EnemyKind, Image, Scenario, ScenarioVariant};
use itertools::Itertools;

use crate::analyze;
use crate::model::{AggregateSummary, BuildingHighlight, EnemyTotals, FastestEnemy, GroupStats};

/// Enemies further than this from the observer count as distant, in metres.
pub const DISTANT_RANGE_M: f64 = 20.0;

/// Builds the document-wide aggregations.
///
/// All maxima keep the first-encountered record on ties, so the section is
/// deterministic for a given document.
pub fn aggregate_summary(scenario: &Scenario, variant: ScenarioVariant) -> AggregateSummary {
    let (largest_building, longest_alley) = match &scenario.terrain {
        Some(terrain) => (
            analyze::max_by_key_first(terrain.buildings.iter(), |building| building.footprint())
                .map(building_highlight),
            analyze::max_by_key_first(terrain.alleys.iter(), |alley| alley.length).copied(),
        ),
        None => (None, None),
    };

    let distant_enemies = match variant {
        ScenarioVariant::Urban => Some(
            scenario
                .all_enemies()
                .filter_map(|(_, enemy)| enemy.distance_from_origin())
                .filter(|distance| *distance > DISTANT_RANGE_M)
                .count(),
        ),
        ScenarioVariant::OpenField => None,
    };

    let fastest_enemy =
        analyze::max_by_key_first(scenario.all_enemies(), |(_, enemy)| enemy.speed).map(
            |(image, enemy)| FastestEnemy {
                filename: image.filename.clone(),
                id: enemy.id,
                kind: enemy.kind,
                speed: enemy.speed,
            },
        );

    AggregateSummary {
        groups: group_stats(scenario, variant),
        enemy_totals: enemy_totals(scenario),
        largest_building,
        longest_alley,
        distant_enemies,
        fastest_enemy,
    }
}

/// Groups images by tactic for urban documents and by scene type otherwise,
/// keeping first-encountered group order.
fn group_stats(scenario: &Scenario, variant: ScenarioVariant) -> Vec<GroupStats> {
    let group_key = |image: &&Image| match variant {
        ScenarioVariant::Urban => image
            .tactic_type
            .clone()
            .unwrap_or_else(|| image.type_tag.clone()),
        ScenarioVariant::OpenField => image.type_tag.clone(),
    };

    analyze::group_in_order(scenario.images.iter(), group_key)
        .into_iter()
        .map(|(key, images)| GroupStats {
            key,
            images: images.len(),
            avg_enemy_count: analyze::mean(
                images.iter().map(|image| image.enemy_count as f64),
            ),
            avg_enemy_speed: analyze::mean(
                images
                    .iter()
                    .flat_map(|image| image.enemies.iter())
                    .map(|enemy| enemy.speed),
            ),
        })
        .collect()
}

fn enemy_totals(scenario: &Scenario) -> EnemyTotals {
    let by_kind = scenario.all_enemies().counts_by(|(_, enemy)| enemy.kind);
    EnemyTotals {
        soldiers: by_kind.get(&EnemyKind::Soldier).copied().unwrap_or(0),
        tanks: by_kind.get(&EnemyKind::Tank).copied().unwrap_or(0),
        drones: by_kind.get(&EnemyKind::Drone).copied().unwrap_or(0),
    }
}

fn building_highlight(building: &Building) -> BuildingHighlight {
    BuildingHighlight {
        id: building.id,
        x: building.x,
        z: building.z,
        width: building.width,
        depth: building.depth,
        height: building.height,
        footprint: building.footprint(),
    }
}
