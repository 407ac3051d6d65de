/// Command-line interface and generation runner
pub mod cli;
/// Runtime defaults, safety limits and render colors
pub mod configuration;
/// Error types for construction, validation and export
pub mod error;
/// PNG rasterization of maze snapshots
pub mod image;
/// Step progress reporting for the CLI
pub mod progress;
/// ASCII rendering of maze snapshots
pub mod text;
/// Frame capture and GIF generation for animated runs
pub mod visualization;
