mod tables;

use std::io::{self, Write};

use battlefield_model::ScenarioVariant;
use itertools::Itertools;
use tabled::settings::Style;
use tabled::Table;

use crate::model::ScenarioReport;
use crate::render::tables::{tactic_label, EnemyRow, GroupRow, ImageRow};
use crate::section::DISTANT_RANGE_M;

/// Writes a [`ScenarioReport`] to some output.
pub trait RenderReport {
    type Error;

    fn render(&mut self, report: &ScenarioReport) -> Result<(), Self::Error>;
}

/// Renders the report as human-readable sections with tables.
pub struct TextRenderer<W>
where
    W: Write,
{
    writer: W,
}

impl<W> TextRenderer<W>
where
    W: Write,
{
    /// Creates a new [`TextRenderer`] writing to the specified [`Write`]r.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_overview(&mut self, report: &ScenarioReport) -> io::Result<()> {
        let metadata = &report.metadata;
        writeln!(self.writer, "=== Scenario overview ({}) ===", report.variant)?;
        writeln!(self.writer, "version: {}", metadata.version)?;
        if let Some(generated_at) = &metadata.generated_at {
            writeln!(self.writer, "generated at: {generated_at}")?;
        }
        if let Some(terrain_file) = &metadata.terrain_file {
            writeln!(self.writer, "terrain file: {terrain_file}")?;
        }
        if let Some(coordinate_system) = &metadata.coordinate_system {
            writeln!(self.writer, "coordinate system: {coordinate_system}")?;
        }
        writeln!(self.writer, "image size: {} px", metadata.image_size)?;
        writeln!(
            self.writer,
            "coordinate range: +/-{} m",
            metadata.coordinate_range
        )?;
        if !metadata.circle_radii.is_empty() {
            writeln!(
                self.writer,
                "circle radii: {}",
                metadata
                    .circle_radii
                    .iter()
                    .map(|radius| format!("{radius} m"))
                    .join(", ")
            )?;
        }
        if let Some(speed_ranges) = &metadata.speed_ranges {
            writeln!(
                self.writer,
                "normal speed: {:.1} to {:.1} m/s",
                speed_ranges.normal.min, speed_ranges.normal.max
            )?;
            writeln!(
                self.writer,
                "fast speed: {:.1} to {:.1} m/s",
                speed_ranges.fast.min, speed_ranges.fast.max
            )?;
        }
        if !metadata.tactics.is_empty() {
            writeln!(
                self.writer,
                "declared tactics: {}",
                metadata.tactics.join(", ")
            )?;
        }
        writeln!(self.writer, "declared images: {}", metadata.total_images)?;
        Ok(())
    }

    fn write_terrain(&mut self, report: &ScenarioReport) -> io::Result<()> {
        writeln!(self.writer, "=== Terrain ===")?;
        match &report.terrain {
            Some(terrain) => {
                writeln!(self.writer, "buildings: {}", terrain.buildings)?;
                writeln!(self.writer, "alleys: {}", terrain.alleys)?;
                writeln!(
                    self.writer,
                    "obstacles: {} (cover {}, barrier {}, vehicle {})",
                    terrain.obstacles, terrain.covers, terrain.barriers, terrain.vehicles
                )?;
            }
            None => {
                writeln!(self.writer, "(no terrain in this document)")?;
            }
        }
        Ok(())
    }

    fn write_images(&mut self, report: &ScenarioReport) -> io::Result<()> {
        writeln!(self.writer, "=== Images ({}) ===", report.images.len())?;
        if report.images.is_empty() {
            writeln!(self.writer, "(no images in document)")?;
            return Ok(());
        }
        let rows: Vec<ImageRow> = report.images.iter().map(ImageRow::from).collect();
        let mut table = Table::new(&rows);
        table.with(Style::modern());
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_first_image(&mut self, report: &ScenarioReport) -> io::Result<()> {
        let Some(detail) = &report.first_image else {
            writeln!(self.writer, "=== First image ===")?;
            writeln!(self.writer, "(no images in document)")?;
            return Ok(());
        };
        writeln!(self.writer, "=== First image: {} ===", detail.filename)?;
        if detail.tactic_type.is_some() || detail.tactic_name.is_some() {
            writeln!(
                self.writer,
                "tactic: {}",
                tactic_label(detail.tactic_name.as_deref(), detail.tactic_type.as_deref())
            )?;
        }
        writeln!(self.writer, "declared enemies: {}", detail.declared_enemy_count)?;
        if detail.enemies.is_empty() {
            writeln!(self.writer, "(no enemies in this image)")?;
            return Ok(());
        }
        let rows: Vec<EnemyRow> = detail
            .enemies
            .iter()
            .enumerate()
            .map(|(index, enemy)| EnemyRow::new(index + 1, enemy))
            .collect();
        let mut table = Table::new(&rows);
        table.with(Style::modern());
        writeln!(self.writer, "{table}")?;
        if detail.truncated > 0 {
            writeln!(self.writer, "({} more enemies not shown)", detail.truncated)?;
        }
        Ok(())
    }

    fn write_aggregates(&mut self, report: &ScenarioReport) -> io::Result<()> {
        writeln!(self.writer, "=== Aggregates ===")?;
        let aggregates = &report.aggregates;
        let group_label = match report.variant {
            ScenarioVariant::Urban => "tactic",
            ScenarioVariant::OpenField => "type",
        };
        if aggregates.groups.is_empty() {
            writeln!(self.writer, "images by {group_label}: (no images)")?;
        } else {
            writeln!(self.writer, "images by {group_label}:")?;
            let rows: Vec<GroupRow> = aggregates.groups.iter().map(GroupRow::from).collect();
            let mut table = Table::new(&rows);
            table.with(Style::modern());
            writeln!(self.writer, "{table}")?;
        }
        let totals = &aggregates.enemy_totals;
        writeln!(
            self.writer,
            "enemy totals: {} soldiers, {} tanks, {} drones",
            totals.soldiers, totals.tanks, totals.drones
        )?;
        if let Some(building) = &aggregates.largest_building {
            writeln!(
                self.writer,
                "largest building: id {} at ({:.2}, {:.2}), {:.2} m x {:.2} m, height {:.2} m",
                building.id, building.x, building.z, building.width, building.depth,
                building.height
            )?;
        }
        if let Some(alley) = &aggregates.longest_alley {
            writeln!(
                self.writer,
                "longest alley: id {} from ({:.2}, {:.2}) to ({:.2}, {:.2}), {:.2} m long, {:.2} m wide",
                alley.id, alley.start_x, alley.start_z, alley.end_x, alley.end_z, alley.length,
                alley.width
            )?;
        }
        if let Some(distant) = aggregates.distant_enemies {
            writeln!(
                self.writer,
                "enemies beyond {DISTANT_RANGE_M} m: {distant}"
            )?;
        }
        match &aggregates.fastest_enemy {
            Some(fastest) => {
                writeln!(
                    self.writer,
                    "fastest enemy: {} at {:.2} m/s in {}",
                    fastest.kind, fastest.speed, fastest.filename
                )?;
            }
            None => {
                writeln!(self.writer, "fastest enemy: (no enemies in document)")?;
            }
        }
        Ok(())
    }

    /// Skipped entirely for a clean document.
    fn write_consistency(&mut self, report: &ScenarioReport) -> io::Result<()> {
        if report.discrepancies.is_empty() {
            return Ok(());
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "=== Data consistency ===")?;
        for discrepancy in &report.discrepancies {
            writeln!(self.writer, "! {discrepancy}")?;
        }
        Ok(())
    }
}

impl<W> RenderReport for TextRenderer<W>
where
    W: Write,
{
    type Error = io::Error;

    fn render(&mut self, report: &ScenarioReport) -> Result<(), Self::Error> {
        self.write_overview(report)?;
        writeln!(self.writer)?;
        self.write_terrain(report)?;
        writeln!(self.writer)?;
        self.write_images(report)?;
        writeln!(self.writer)?;
        self.write_first_image(report)?;
        writeln!(self.writer)?;
        self.write_aggregates(report)?;
        self.write_consistency(report)?;
        Ok(())
    }
}

/// Renders the report as one pretty-printed JSON document.
pub struct JsonRenderer<W>
where
    W: Write,
{
    writer: W,
}

impl<W> JsonRenderer<W>
where
    W: Write,
{
    /// Creates a new [`JsonRenderer`] writing to the specified [`Write`]r.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W> RenderReport for JsonRenderer<W>
where
    W: Write,
{
    type Error = anyhow::Error;

    fn render(&mut self, report: &ScenarioReport) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
