//! Frame capture and GIF generation for animated generation runs
//!
//! The capture renders one shaded frame per recorded step, replaying the
//! run exactly as the engine produced it. Frame skipping keeps the apparent
//! speed when the requested delay is below what GIF viewers support.

use crate::algorithm::snapshot::MazeSnapshot;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{MazeError, Result};
use crate::io::image::{CellShading, render_snapshot};
use image::{Delay, Frame, RgbaImage};

/// Captures rendered frames during algorithm execution
pub struct VisualizationCapture {
    frames: Vec<RgbaImage>,
    cell_size: usize,
}

impl VisualizationCapture {
    /// Create an empty capture rendering at the given cell size
    pub fn new(cell_size: usize, expected_steps: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_steps + 1),
            cell_size,
        }
    }

    /// Render and record the snapshot as one animation frame
    pub fn record_step(&mut self, snapshot: &MazeSnapshot) {
        self.frames
            .push(render_snapshot(snapshot, self.cell_size, CellShading::Progress));
    }

    /// Returns the number of recorded frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// If the requested delay is below [`VIEWER_MIN_FRAME_DELAY_MS`], every
    /// k-th frame is kept so the animation plays at the intended apparent
    /// speed. The final frame is always included and displayed longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(MazeError::EmptyCapture);
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let last_index = self.frames.len() - 1;

        let mut frames = Vec::with_capacity(self.frames.len() / skip_factor + 2);
        for (index, img) in self.frames.iter().enumerate() {
            if index % skip_factor == 0 && index != last_index {
                frames.push(Frame::from_parts(
                    img.clone(),
                    0,
                    0,
                    Delay::from_numer_denom_ms(effective_delay_ms, 1),
                ));
            }
        }

        // Final frame displays longer for better visibility
        if let Some(last) = self.frames.last() {
            let final_delay = Delay::from_numer_denom_ms(effective_delay_ms * 25, 1);
            frames.push(Frame::from_parts(last.clone(), 0, 0, final_delay));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                    path: parent.to_path_buf(),
                    operation: "create directory",
                    source: e,
                })?;
            }
        }

        let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::generator::MazeGenerator;

    #[test]
    fn records_one_frame_per_step() {
        let mut generator = MazeGenerator::new(2, 2, Some(3)).unwrap();
        let total = MazeGenerator::expected_steps(2, 2);
        let mut capture = VisualizationCapture::new(4, total);

        while !generator.is_complete() {
            generator.step();
            capture.record_step(&generator.snapshot());
        }
        assert_eq!(capture.frame_count(), total);
    }

    #[test]
    fn export_without_frames_is_rejected() {
        let capture = VisualizationCapture::new(4, 0);
        assert!(matches!(
            capture.export_gif("unused.gif", 40),
            Err(MazeError::EmptyCapture)
        ));
    }
}
