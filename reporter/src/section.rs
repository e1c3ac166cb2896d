//! Report section builders. Each builder is a pure function from the loaded
//! document to one section of [`ScenarioReport`](crate::model::ScenarioReport).

mod aggregates;
mod detail;
mod images;
mod terrain;

pub use aggregates::{aggregate_summary, DISTANT_RANGE_M};
pub use detail::{first_image_detail, URBAN_DETAIL_CAP};
pub use images::image_listing;
pub use terrain::terrain_summary;
