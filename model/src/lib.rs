//! Data model for the battlefield scenario documents produced by the image
//! generators, along with a loader that turns a JSON document into typed
//! values and a consistency scan over the loaded data.
//!
//! Both document variants are represented by a single [Scenario] type. The
//! open-field variant has no terrain and no tactic annotations; the urban
//! variant carries both. [Scenario::variant] tells them apart from content.

pub mod consistency;
pub mod load;
pub mod schema;

pub use consistency::{find_discrepancies, Discrepancy, KNOWN_TACTICS};
pub use load::{load_scenario, load_scenario_file, LoadError};
pub use schema::{
    Alley, Building, Enemy, EnemyKind, Image, Metadata, Obstacle, ObstacleKind, Scenario,
    ScenarioVariant, SpeedRange, SpeedRanges, Terrain,
};
