//! PNG rasterization of maze snapshots
//!
//! A snapshot renders to a raster of `cols * cell_size + 1` by
//! `rows * cell_size + 1` pixels: cell interiors plus one-pixel wall lines
//! drawn along every intact wall flag. Border walls are never removed by the
//! engine, so the outline is always closed.

use crate::algorithm::snapshot::MazeSnapshot;
use crate::io::configuration::{
    BACKGROUND_COLOR, CURRENT_COLOR, STACK_COLOR, VISITED_COLOR, WALL_COLOR,
};
use crate::io::error::{MazeError, Result};
use image::{Rgba, RgbaImage};

/// How cell interiors are painted
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellShading {
    /// Background only; walls carry all the information
    Plain,
    /// Color visited, in-stack and current cells as the run progresses
    Progress,
}

/// Rasterize a snapshot into an RGBA image
///
/// With [`CellShading::Progress`] the interiors follow the animation
/// palette: current over stack over visited. A zero `cell_size` is treated
/// as one pixel.
pub fn render_snapshot(
    snapshot: &MazeSnapshot,
    cell_size: usize,
    shading: CellShading,
) -> RgbaImage {
    let cell_px = cell_size.max(1) as u32;
    let width = snapshot.cols as u32 * cell_px + 1;
    let height = snapshot.rows as u32 * cell_px + 1;

    let mut img = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));
    let stack_members = snapshot.stack_members();

    for (index, cell) in snapshot.cells.iter().enumerate() {
        let x0 = cell.col as u32 * cell_px;
        let y0 = cell.row as u32 * cell_px;

        if shading == CellShading::Progress {
            let fill = if index == snapshot.current_index && !snapshot.complete {
                Some(CURRENT_COLOR)
            } else if stack_members.contains(index) {
                Some(STACK_COLOR)
            } else if cell.visited {
                Some(VISITED_COLOR)
            } else {
                None
            };

            if let Some(color) = fill {
                for dy in 1..cell_px {
                    for dx in 1..cell_px {
                        img.put_pixel(x0 + dx, y0 + dy, Rgba(color));
                    }
                }
            }
        }

        // Wall lines; right/bottom sides are the neighbors' left/top except
        // on the grid border
        if cell.walls.top {
            for dx in 0..=cell_px {
                img.put_pixel(x0 + dx, y0, Rgba(WALL_COLOR));
            }
        }
        if cell.walls.left {
            for dy in 0..=cell_px {
                img.put_pixel(x0, y0 + dy, Rgba(WALL_COLOR));
            }
        }
        if cell.walls.right {
            for dy in 0..=cell_px {
                img.put_pixel(x0 + cell_px, y0 + dy, Rgba(WALL_COLOR));
            }
        }
        if cell.walls.bottom {
            for dx in 0..=cell_px {
                img.put_pixel(x0 + dx, y0 + cell_px, Rgba(WALL_COLOR));
            }
        }
    }

    img
}

/// Export a snapshot as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_snapshot_as_png(
    snapshot: &MazeSnapshot,
    cell_size: usize,
    output_path: &str,
) -> Result<()> {
    let img = render_snapshot(snapshot, cell_size, CellShading::Plain);

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::generator::MazeGenerator;

    #[test]
    fn raster_dimensions_follow_cell_size() {
        let mut generator = MazeGenerator::new(4, 3, Some(7)).unwrap();
        generator.generate();

        let img = render_snapshot(&generator.snapshot(), 10, CellShading::Plain);
        assert_eq!(img.dimensions(), (41, 31));
    }

    #[test]
    fn border_outline_is_closed() {
        let mut generator = MazeGenerator::new(3, 3, Some(7)).unwrap();
        generator.generate();

        let img = render_snapshot(&generator.snapshot(), 4, CellShading::Plain);
        let (width, height) = img.dimensions();
        for x in 0..width {
            assert_eq!(img.get_pixel(x, 0).0, WALL_COLOR);
            assert_eq!(img.get_pixel(x, height - 1).0, WALL_COLOR);
        }
        for y in 0..height {
            assert_eq!(img.get_pixel(0, y).0, WALL_COLOR);
            assert_eq!(img.get_pixel(width - 1, y).0, WALL_COLOR);
        }
    }
}
