use tabled::Tabled;

use crate::model::{EnemyDetail, GroupStats, ImageSummary};

#[derive(Tabled)]
pub(crate) struct ImageRow {
    pub image: String,
    pub filename: String,
    #[tabled(rename = "type")]
    pub type_tag: String,
    pub tactic: String,
    pub declared: usize,
    pub soldiers: usize,
    pub tanks: usize,
    pub drones: usize,
}

impl From<&ImageSummary> for ImageRow {
    fn from(summary: &ImageSummary) -> Self {
        Self {
            image: summary.image_id.clone(),
            filename: summary.filename.clone(),
            type_tag: summary.type_tag.clone(),
            tactic: tactic_label(
                summary.tactic_name.as_deref(),
                summary.tactic_type.as_deref(),
            ),
            declared: summary.declared_enemy_count,
            soldiers: summary.soldiers,
            tanks: summary.tanks,
            drones: summary.drones,
        }
    }
}

#[derive(Tabled)]
pub(crate) struct EnemyRow {
    #[tabled(rename = "#")]
    pub label: String,
    pub kind: String,
    #[tabled(rename = "position (m)")]
    pub position: String,
    #[tabled(rename = "speed (m/s)", display = "float2")]
    pub speed: f64,
    #[tabled(rename = "heading (deg)", display = "float1")]
    pub heading: f64,
    #[tabled(rename = "distance (m)", display = "float2")]
    pub distance: f64,
    pub bearing: String,
}

impl EnemyRow {
    /// `ordinal` is the 1-based position in the listing, used when the
    /// document assigns no enemy ids.
    pub(crate) fn new(ordinal: usize, detail: &EnemyDetail) -> Self {
        Self {
            label: detail
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| ordinal.to_string()),
            kind: detail.kind.to_string(),
            position: format!("({:.2}, {:.2})", detail.x, detail.lateral),
            speed: detail.speed,
            heading: detail.direction,
            distance: detail.distance_from_origin,
            bearing: format!("{} ({:.0} deg)", detail.sector, detail.bearing),
        }
    }
}

#[derive(Tabled)]
pub(crate) struct GroupRow {
    pub group: String,
    pub images: usize,
    #[tabled(rename = "avg enemies", display = "opt1")]
    pub avg_enemies: Option<f64>,
    #[tabled(rename = "avg speed (m/s)", display = "opt2")]
    pub avg_speed: Option<f64>,
}

impl From<&GroupStats> for GroupRow {
    fn from(stats: &GroupStats) -> Self {
        Self {
            group: stats.key.clone(),
            images: stats.images,
            avg_enemies: stats.avg_enemy_count,
            avg_speed: stats.avg_enemy_speed,
        }
    }
}

pub(crate) fn tactic_label(name: Option<&str>, code: Option<&str>) -> String {
    match (name, code) {
        (Some(name), Some(code)) => format!("{name} ({code})"),
        (None, Some(code)) => code.to_string(),
        (Some(name), None) => name.to_string(),
        (None, None) => "-".to_string(),
    }
}

fn float1(n: &f64) -> String {
    format!("{:.1}", n)
}

fn float2(n: &f64) -> String {
    format!("{:.2}", n)
}

fn opt1(n: &Option<f64>) -> String {
    n.map(|n| format!("{:.1}", n)).unwrap_or_else(|| "-".to_string())
}

fn opt2(n: &Option<f64>) -> String {
    n.map(|n| format!("{:.2}", n)).unwrap_or_else(|| "-".to_string())
}
