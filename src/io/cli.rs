//! Command-line interface for generating and exporting mazes

use crate::algorithm::generator::MazeGenerator;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_OUTPUT, DEFAULT_ROWS, GIF_FRAME_DELAY_MS,
    MAX_CELL_SIZE, MAX_GRID_DIMENSION, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_snapshot_as_png;
use crate::io::progress::StepProgress;
use crate::io::text::render_text;
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazecarve")]
#[command(
    author,
    version,
    about = "Generate mazes with randomized depth-first search"
)]
/// Command-line arguments for the maze generation tool
pub struct Cli {
    /// Number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Number of grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Side length of a rendered cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: usize,

    /// Record the run as an animated GIF alongside the PNG
    #[arg(short, long)]
    pub visualize: bool,

    /// Print the finished maze as ASCII art
    #[arg(short, long)]
    pub text: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one generation run: stepping, progress and exports
pub struct GenerationRunner {
    cli: Cli,
}

impl GenerationRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the maze and write the requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, engine construction or any
    /// export fails.
    // Allow print for the ASCII rendering the user explicitly asked for
    #[allow(clippy::print_stdout)]
    pub fn run(&mut self) -> Result<()> {
        self.validate()?;

        let mut generator = MazeGenerator::new(self.cli.cols, self.cli.rows, self.cli.seed)?;
        let total_steps = MazeGenerator::expected_steps(self.cli.cols, self.cli.rows);

        let progress = self
            .cli
            .should_show_progress()
            .then(|| StepProgress::new(total_steps));
        let mut capture = self
            .cli
            .visualize
            .then(|| VisualizationCapture::new(self.cli.cell_size, total_steps));

        while !generator.is_complete() {
            generator.step();
            if let Some(capture) = capture.as_mut() {
                capture.record_step(&generator.snapshot());
            }
            if let Some(progress) = &progress {
                progress.step();
            }
        }

        if let Some(progress) = &progress {
            progress.finish();
        }

        let snapshot = generator.snapshot();
        let output_path = path_as_str(&self.cli.output, "output")?;
        export_snapshot_as_png(&snapshot, self.cli.cell_size, output_path)?;

        if let Some(capture) = &capture {
            let gif_path = visualization_path(&self.cli.output);
            capture.export_gif(path_as_str(&gif_path, "output")?, GIF_FRAME_DELAY_MS)?;
        }

        if self.cli.text {
            println!("{}", render_text(&snapshot));
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.cols > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "cols",
                &self.cli.cols,
                &format!("exceeds the maximum grid dimension {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.cli.rows > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "rows",
                &self.cli.rows,
                &format!("exceeds the maximum grid dimension {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.cli.cell_size == 0 || self.cli.cell_size > MAX_CELL_SIZE {
            return Err(invalid_parameter(
                "cell-size",
                &self.cli.cell_size,
                &format!("must be between 1 and {MAX_CELL_SIZE} pixels"),
            ));
        }
        Ok(())
    }
}

fn path_as_str<'a>(path: &'a Path, parameter: &'static str) -> Result<&'a str> {
    path.to_str()
        .ok_or_else(|| invalid_parameter(parameter, &path.display(), &"path is not valid UTF-8"))
}

fn visualization_path(output: &Path) -> PathBuf {
    let stem = output.file_stem().unwrap_or_default();
    let gif_name = format!("{}{VISUALIZATION_SUFFIX}", stem.to_string_lossy());

    output.parent().map_or_else(
        || PathBuf::from(&gif_name),
        |parent| parent.join(&gif_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::error::MazeError;

    fn cli_with(cols: usize, rows: usize, cell_size: usize) -> Cli {
        Cli {
            cols,
            rows,
            seed: Some(0),
            output: PathBuf::from("maze.png"),
            cell_size,
            visualize: false,
            text: false,
            quiet: true,
        }
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let mut runner = GenerationRunner::new(cli_with(MAX_GRID_DIMENSION + 1, 4, 8));
        assert!(matches!(
            runner.run(),
            Err(MazeError::InvalidParameter {
                parameter: "cols",
                ..
            })
        ));
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let mut runner = GenerationRunner::new(cli_with(4, 4, 0));
        assert!(matches!(
            runner.run(),
            Err(MazeError::InvalidParameter {
                parameter: "cell-size",
                ..
            })
        ));
    }

    #[test]
    fn visualization_path_swaps_extension() {
        let path = visualization_path(Path::new("out/maze.png"));
        assert_eq!(path, Path::new("out/maze_steps.gif"));
    }
}
