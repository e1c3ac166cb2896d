use std::fmt;

use serde::Serialize;

use crate::schema::Scenario;

/// Tactic codes the urban generator can pick from. Used as a fallback for
/// the unknown-tactic check when a document does not declare its own list.
pub const KNOWN_TACTICS: [&str; 10] = [
    "encirclement",
    "pincer",
    "ambush",
    "retreat",
    "frontal_assault",
    "flanking",
    "defensive",
    "guerrilla",
    "pursuit",
    "dispersed",
];

/// A self-consistency finding over a loaded document.
///
/// Findings never fail a load. They are surfaced in the report so a reader
/// can judge whether the generator run went wrong.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    /// An image declares a different enemy count than it lists.
    EnemyCountMismatch {
        image_id: String,
        declared: usize,
        actual: usize,
    },
    /// An image uses a tactic code outside the declared tactic list.
    UnknownTactic { image_id: String, tactic: String },
    /// The metadata declares a different image count than the document holds.
    TotalImagesMismatch { declared: usize, actual: usize },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::EnemyCountMismatch {
                image_id,
                declared,
                actual,
            } => write!(
                f,
                "image {image_id} declares {declared} enemies but lists {actual}"
            ),
            Discrepancy::UnknownTactic { image_id, tactic } => write!(
                f,
                "image {image_id} uses tactic `{tactic}` which is not in the tactic list"
            ),
            Discrepancy::TotalImagesMismatch { declared, actual } => write!(
                f,
                "metadata declares {declared} images but the document contains {actual}"
            ),
        }
    }
}

/// Scans a loaded scenario for internal inconsistencies.
///
/// Findings are ordered by image, with the document-level total check last.
pub fn find_discrepancies(scenario: &Scenario) -> Vec<Discrepancy> {
    let mut findings = Vec::new();

    let declared_tactics: Vec<&str> = if scenario.metadata.tactics.is_empty() {
        KNOWN_TACTICS.to_vec()
    } else {
        scenario.metadata.tactics.iter().map(String::as_str).collect()
    };

    for image in &scenario.images {
        if image.enemy_count != image.enemies.len() {
            findings.push(Discrepancy::EnemyCountMismatch {
                image_id: image.image_id.clone(),
                declared: image.enemy_count,
                actual: image.enemies.len(),
            });
        }
        if let Some(tactic) = &image.tactic_type {
            if !declared_tactics.contains(&tactic.as_str()) {
                findings.push(Discrepancy::UnknownTactic {
                    image_id: image.image_id.clone(),
                    tactic: tactic.clone(),
                });
            }
        }
    }

    if scenario.metadata.total_images != scenario.images.len() {
        findings.push(Discrepancy::TotalImagesMismatch {
            declared: scenario.metadata.total_images,
            actual: scenario.images.len(),
        });
    }

    findings
}
