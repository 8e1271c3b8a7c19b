use cpmaze::{
    dims::Dims,
    gameboard::{Cell, CellWall, Maze},
};
use colored::Colorize;

/// Draws the maze with `+`, `-` and `|` walls, two characters per cell interior.
///
/// Cells on the walker's path show `()`, cells it gave up on show `><`.
/// With `color` the marks are painted, without it the output is plain ASCII.
pub fn render_maze(maze: &Maze, color: bool) -> String {
    let mut out = String::new();
    let cells = maze.get_cells();

    for (y, row) in cells.rows().enumerate() {
        if y == 0 {
            out.push_str(&horizontal_line(row, CellWall::Top));
        }

        out.push(if row[0].is_open(CellWall::Left) { ' ' } else { '|' });
        for cell in row {
            out.push_str(&interior(cell, color));
            out.push(if cell.is_open(CellWall::Right) { ' ' } else { '|' });
        }
        out.push('\n');

        out.push_str(&horizontal_line(row, CellWall::Bottom));
    }

    out
}

fn horizontal_line(row: &[Cell], wall: CellWall) -> String {
    let mut line = String::from("+");
    for cell in row {
        line.push_str(if cell.is_open(wall) { "  " } else { "--" });
        line.push('+');
    }
    line.push('\n');
    line
}

fn interior(cell: &Cell, color: bool) -> String {
    let mark = match cell.visits() {
        0 => return "  ".to_string(),
        1 => "()",
        _ => "><",
    };

    match (color, cell.visits()) {
        (false, _) => mark.to_string(),
        (true, 1) => mark.green().bold().to_string(),
        (true, _) => mark.red().to_string(),
    }
}

/// One bracketed row of packed cell codes per maze row.
pub fn render_codes(maze: &Maze) -> String {
    let codes = maze.codes();
    let width = codes.iter().map(|code| code.to_string().len()).max().unwrap_or(1);

    let mut out = String::new();
    for row in codes.rows() {
        let line: Vec<_> = row.iter().map(|code| format!("{:>width$}", code)).collect();
        out.push_str(&format!("[ {} ]\n", line.join(", ")));
    }
    out
}

pub fn format_pos(pos: Dims) -> String {
    format!("row {}, column {}", pos.1, pos.0)
}
