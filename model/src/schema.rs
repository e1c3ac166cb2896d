use std::fmt;

use serde::{Deserialize, Serialize};

/// A full scenario document: generation metadata, optional static terrain and
/// the ordered scene records.
///
/// Field names follow the generator output exactly. Unknown fields are
/// ignored so documents from newer generators stay loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub metadata: Metadata,
    /// Static terrain layout. Only present in urban documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<Terrain>,
    pub images: Vec<Image>,
}

impl Scenario {
    /// Detects which generator produced this document from its content.
    pub fn variant(&self) -> ScenarioVariant {
        let urban = self.terrain.is_some()
            || !self.metadata.tactics.is_empty()
            || self.images.iter().any(|image| image.tactic_type.is_some());
        if urban {
            ScenarioVariant::Urban
        } else {
            ScenarioVariant::OpenField
        }
    }

    /// Iterates over every enemy in document order, paired with the image
    /// that contains it.
    pub fn all_enemies(&self) -> impl Iterator<Item = (&Image, &Enemy)> {
        self.images
            .iter()
            .flat_map(|image| image.enemies.iter().map(move |enemy| (image, enemy)))
    }
}

/// The two document shapes the generators produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioVariant {
    OpenField,
    Urban,
}

impl fmt::Display for ScenarioVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioVariant::OpenField => write!(f, "open-field"),
            ScenarioVariant::Urban => write!(f, "urban"),
        }
    }
}

/// Generation metadata shared by both variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub version: String,
    /// Generation timestamp. Open-field documents write `null` here.
    #[serde(default)]
    pub generated_at: Option<String>,
    /// Name of the terrain file the urban generator rendered against.
    #[serde(default)]
    pub terrain_file: Option<String>,
    /// Coordinate system label, `xOz` for urban documents.
    #[serde(default)]
    pub coordinate_system: Option<String>,
    /// Rendered image edge length in pixels.
    pub image_size: u32,
    /// Half-width of the coordinate square in metres.
    pub coordinate_range: u32,
    /// Radii of the reference circles drawn on each image, in metres.
    #[serde(default)]
    pub circle_radii: Vec<u32>,
    #[serde(default)]
    pub speed_ranges: Option<SpeedRanges>,
    /// Tactic codes the generator was allowed to pick from. Empty for
    /// open-field documents.
    #[serde(default)]
    pub tactics: Vec<String>,
    /// Number of images the generator claims to have written.
    pub total_images: usize,
}

/// The named speed bands enemies are sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRanges {
    pub normal: SpeedRange,
    pub fast: SpeedRange,
}

/// A closed speed interval in metres per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

/// Static terrain layout of an urban document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub alleys: Vec<Alley>,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

/// A building footprint with its height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: u32,
    pub x: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Wall, door and window descriptors are carried opaquely; no report
    /// inspects them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub walls: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doors: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<serde_json::Value>,
}

impl Building {
    /// Ground area covered by the building in square metres.
    pub fn footprint(&self) -> f64 {
        self.width * self.depth
    }
}

/// A straight alley segment between two ground points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Alley {
    pub id: u32,
    pub start_x: f64,
    pub start_z: f64,
    pub end_x: f64,
    pub end_z: f64,
    pub width: f64,
    pub length: f64,
}

/// A placed obstacle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ObstacleKind,
    pub x: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
    pub rotation: f64,
}

/// The closed set of obstacle tags. Any other tag fails the load instead of
/// being misclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    #[serde(rename = "Cover", alias = "cover")]
    Cover,
    #[serde(rename = "Barrier", alias = "barrier")]
    Barrier,
    #[serde(rename = "Vehicle", alias = "vehicle")]
    Vehicle,
}

impl fmt::Display for ObstacleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObstacleKind::Cover => write!(f, "cover"),
            ObstacleKind::Barrier => write!(f, "barrier"),
            ObstacleKind::Vehicle => write!(f, "vehicle"),
        }
    }
}

/// One rendered scene and the enemies placed in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub image_id: String,
    pub filename: String,
    /// Scene type tag, e.g. `type1_sparse` or `urban_combat`.
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Tactic code for urban scenes.
    #[serde(default)]
    pub tactic_type: Option<String>,
    /// Localized tactic name for urban scenes.
    #[serde(default, rename = "tacticNameCN")]
    pub tactic_name: Option<String>,
    /// Number of enemies the generator claims to have placed.
    pub enemy_count: usize,
    pub speed_range: SpeedRange,
    pub enemies: Vec<Enemy>,
}

/// One placed enemy.
///
/// The lateral ground coordinate is `z` in the urban `xOz` system and `y` in
/// the open-field system; whichever key is present is the same axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable identifier within the image. Urban documents only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(rename = "type")]
    pub kind: EnemyKind,
    pub x: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Speed in metres per second.
    pub speed: f64,
    /// Heading in degrees. Generators may write values outside [0, 360).
    pub direction: f64,
}

impl Enemy {
    /// The lateral ground coordinate, whichever axis key the document used.
    pub fn lateral(&self) -> Option<f64> {
        self.z.or(self.y)
    }

    /// Straight-line ground distance from the observer at the origin.
    pub fn distance_from_origin(&self) -> Option<f64> {
        self.lateral().map(|lateral| self.x.hypot(lateral))
    }

    /// Heading normalized into [0, 360).
    pub fn normalized_direction(&self) -> f64 {
        self.direction.rem_euclid(360.0)
    }
}

/// The closed set of enemy tags across both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    Soldier,
    Tank,
    // Urban documents spell the drone tag `ifv`.
    #[serde(alias = "ifv")]
    Drone,
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnemyKind::Soldier => write!(f, "soldier"),
            EnemyKind::Tank => write!(f, "tank"),
            EnemyKind::Drone => write!(f, "drone"),
        }
    }
}
