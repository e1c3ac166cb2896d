use clap::ValueEnum;

/// Output format shared by the report binaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections with tables.
    Text,
    /// One pretty-printed JSON document.
    Json,
}
