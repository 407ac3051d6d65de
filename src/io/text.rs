//! ASCII rendering of maze snapshots
//!
//! Walls draw as `+---+` and `|` segments; during a run the current cell is
//! marked `@`, stack cells `*` and visited cells `.`. Finished mazes render
//! with open corridors only, which keeps test assertions readable.

use crate::algorithm::snapshot::MazeSnapshot;

const WALL_H: &str = "---";
const OPEN_H: &str = "   ";

/// Render a snapshot as ASCII art, one text row per wall or corridor line
pub fn render_text(snapshot: &MazeSnapshot) -> String {
    let stack_members = snapshot.stack_members();
    // 4 chars per cell plus border and newlines, per line pair
    let mut out = String::with_capacity((snapshot.cols * 4 + 2) * (snapshot.rows * 2 + 1));

    for row in 0..snapshot.rows {
        for col in 0..snapshot.cols {
            out.push('+');
            let top_intact = snapshot
                .cell_at(col, row)
                .is_none_or(|cell| cell.walls.top);
            out.push_str(if top_intact { WALL_H } else { OPEN_H });
        }
        out.push_str("+\n");

        for col in 0..snapshot.cols {
            let Some(cell) = snapshot.cell_at(col, row) else {
                continue;
            };
            out.push(if cell.walls.left { '|' } else { ' ' });

            let index = col * snapshot.rows + row;
            let body = if snapshot.complete {
                ' '
            } else if index == snapshot.current_index {
                '@'
            } else if stack_members.contains(index) {
                '*'
            } else if cell.visited {
                '.'
            } else {
                ' '
            };
            out.push(' ');
            out.push(body);
            out.push(' ');
        }
        let right_intact = snapshot
            .cell_at(snapshot.cols - 1, row)
            .is_none_or(|cell| cell.walls.right);
        out.push(if right_intact { '|' } else { ' ' });
        out.push('\n');
    }

    for col in 0..snapshot.cols {
        out.push('+');
        let bottom_intact = snapshot
            .cell_at(col, snapshot.rows - 1)
            .is_none_or(|cell| cell.walls.bottom);
        out.push_str(if bottom_intact { WALL_H } else { OPEN_H });
    }
    out.push_str("+\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::generator::MazeGenerator;

    #[test]
    fn single_cell_renders_fully_walled() {
        let mut generator = MazeGenerator::new(1, 1, Some(1)).unwrap();
        generator.generate();

        let text = render_text(&generator.snapshot());
        assert_eq!(text, "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn two_cell_maze_has_one_opening() {
        let mut generator = MazeGenerator::new(2, 1, Some(1)).unwrap();
        generator.generate();

        let text = render_text(&generator.snapshot());
        assert_eq!(text, "+---+---+\n|       |\n+---+---+\n");
    }

    #[test]
    fn line_count_matches_grid_height() {
        let mut generator = MazeGenerator::new(5, 4, Some(9)).unwrap();
        generator.generate();

        let text = render_text(&generator.snapshot());
        assert_eq!(text.lines().count(), 4 * 2 + 1);
    }
}
