use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::schema::Scenario;

/// An error type for [`load_scenario`] and [`load_scenario_file`].
///
/// Every way a load can fail maps onto exactly one variant, so callers can
/// print a single diagnostic without inspecting causes.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The path does not resolve to a file.
    #[error("scenario file not found: {path}")]
    NotFound { path: PathBuf },
    /// The content is not valid JSON, or a present field has the wrong type.
    #[error("malformed scenario data")]
    MalformedInput(#[from] serde_json::Error),
    /// The document parses but is not shaped like a scenario document.
    #[error("scenario document does not match the expected schema: {reason}")]
    SchemaMismatch { reason: String },
    /// Any other I/O failure while opening the file.
    #[error("failed to open scenario file {path}")]
    Unexpected {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level fields a document must carry to be treated as a scenario at all.
const REQUIRED_FIELDS: [&str; 2] = ["metadata", "images"];

/// Loads a scenario document from the given path.
pub fn load_scenario_file<P>(path: P) -> Result<Scenario, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Unexpected {
            path: path.to_path_buf(),
            source,
        },
    })?;
    load_scenario(BufReader::new(file))
}

/// Loads a scenario document from the given reader.
///
/// The document is checked in three stages so the error tells the caller
/// what kind of problem they have: JSON syntax first, then the presence of
/// the required top-level fields, then field types.
pub fn load_scenario<R>(reader: R) -> Result<Scenario, LoadError>
where
    R: Read,
{
    let document: serde_json::Value = serde_json::from_reader(reader)?;
    if !document.is_object() {
        return Err(LoadError::SchemaMismatch {
            reason: "top-level value is not an object".to_string(),
        });
    }
    for field in REQUIRED_FIELDS {
        if document.get(field).is_none() {
            return Err(LoadError::SchemaMismatch {
                reason: format!("missing required field `{field}`"),
            });
        }
    }
    let scenario: Scenario = serde_json::from_value(document)?;
    check_enemy_positions(&scenario)?;
    Ok(scenario)
}

/// Every enemy must carry a lateral coordinate under one of the two axis
/// keys.
fn check_enemy_positions(scenario: &Scenario) -> Result<(), LoadError> {
    for image in &scenario.images {
        for (index, enemy) in image.enemies.iter().enumerate() {
            if enemy.lateral().is_none() {
                return Err(LoadError::SchemaMismatch {
                    reason: format!(
                        "enemy {index} in image {id} has neither `y` nor `z`",
                        id = image.image_id
                    ),
                });
            }
        }
    }
    Ok(())
}
