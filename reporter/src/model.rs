use std::fmt;

use battlefield_model::{Alley, Discrepancy, EnemyKind, Metadata, ScenarioVariant};
use serde::Serialize;

/// The complete report over one scenario document.
///
/// Every section is a pure function of the loaded document, so two runs over
/// the same file produce identical reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub variant: ScenarioVariant,
    /// The document's metadata, echoed as loaded.
    pub metadata: Metadata,
    /// `None` for documents without terrain.
    pub terrain: Option<TerrainSummary>,
    pub images: Vec<ImageSummary>,
    /// Detail of the first image. `None` when the document has no images.
    pub first_image: Option<FirstImageDetail>,
    pub aggregates: AggregateSummary,
    pub discrepancies: Vec<Discrepancy>,
}

/// Counts over the static terrain layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerrainSummary {
    pub buildings: usize,
    pub alleys: usize,
    pub obstacles: usize,
    pub covers: usize,
    pub barriers: usize,
    pub vehicles: usize,
}

/// One row of the per-image listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageSummary {
    pub image_id: String,
    pub filename: String,
    pub type_tag: String,
    pub tactic_type: Option<String>,
    pub tactic_name: Option<String>,
    /// The enemy count the image declares, which may disagree with the
    /// listed enemies. Disagreements show up under discrepancies.
    pub declared_enemy_count: usize,
    pub soldiers: usize,
    pub tanks: usize,
    pub drones: usize,
}

/// Per-enemy detail of the first image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirstImageDetail {
    pub image_id: String,
    pub filename: String,
    pub tactic_type: Option<String>,
    pub tactic_name: Option<String>,
    pub declared_enemy_count: usize,
    pub enemies: Vec<EnemyDetail>,
    /// Number of enemies beyond the listing cap.
    pub truncated: usize,
}

/// One enemy of the first image with its derived values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyDetail {
    pub id: Option<u32>,
    pub kind: EnemyKind,
    pub x: f64,
    pub lateral: f64,
    pub speed: f64,
    /// Heading normalized into [0, 360).
    pub direction: f64,
    pub distance_from_origin: f64,
    /// Bearing from the observer at the origin, in degrees.
    pub bearing: f64,
    pub sector: Sector,
}

/// The 45 degree sector a bearing falls into, as seen by the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    Ahead,
    FrontRight,
    Right,
    RearRight,
    Behind,
    RearLeft,
    Left,
    FrontLeft,
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sector::Ahead => write!(f, "ahead"),
            Sector::FrontRight => write!(f, "front-right"),
            Sector::Right => write!(f, "right"),
            Sector::RearRight => write!(f, "rear-right"),
            Sector::Behind => write!(f, "behind"),
            Sector::RearLeft => write!(f, "rear-left"),
            Sector::Left => write!(f, "left"),
            Sector::FrontLeft => write!(f, "front-left"),
        }
    }
}

/// Document-wide aggregations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    /// Per-group statistics, in first-encountered order. Urban documents
    /// group by tactic, open-field documents by scene type.
    pub groups: Vec<GroupStats>,
    pub enemy_totals: EnemyTotals,
    /// Building with the largest footprint. `None` without terrain.
    pub largest_building: Option<BuildingHighlight>,
    /// Longest alley. `None` without terrain.
    pub longest_alley: Option<Alley>,
    /// Enemies further than [`DISTANT_RANGE_M`](crate::section::DISTANT_RANGE_M)
    /// from the observer. `None` for open-field documents.
    pub distant_enemies: Option<usize>,
    /// The single fastest enemy in the document. `None` without enemies.
    pub fastest_enemy: Option<FastestEnemy>,
}

/// Statistics over one group of images.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub key: String,
    pub images: usize,
    /// Mean of the declared enemy counts. `None` for an empty group.
    pub avg_enemy_count: Option<f64>,
    /// Mean speed over all listed enemies. `None` when the group lists none.
    pub avg_enemy_speed: Option<f64>,
}

/// Enemy counts by kind over the whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EnemyTotals {
    pub soldiers: usize,
    pub tanks: usize,
    pub drones: usize,
}

/// The building with the largest footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildingHighlight {
    pub id: u32,
    pub x: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub footprint: f64,
}

/// The fastest enemy in the document and where it appears.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FastestEnemy {
    pub filename: String,
    pub id: Option<u32>,
    pub kind: EnemyKind,
    pub speed: f64,
}
