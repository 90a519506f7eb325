//! Text rendering of boards.

use std::fmt::Write as _;

use crate::board::{Board, CellState};
use crate::coord::Coord;

/// Render `board` as a grid with 1-based row and column headers. With fog
/// of war on, intact ship cells are drawn as open water.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();
    out.push_str("  ");
    for col in 1..=size {
        let _ = write!(out, " {}", col);
    }
    out.push('\n');
    for row in 0..size {
        let _ = write!(out, "{:2}", row + 1);
        for col in 0..size {
            let marker = match board.cell(Coord::new(col, row)) {
                Some(CellState::Hit) => 'X',
                Some(CellState::Miss) => 'o',
                Some(CellState::Occupied) if !board.is_fog_of_war() => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", marker);
        }
        out.push('\n');
    }
    out
}

/// Render two titled boards side by side.
pub fn render_pair(left_title: &str, left: &Board, right_title: &str, right: &Board) -> String {
    let left_lines: Vec<String> = std::iter::once(left_title.to_string())
        .chain(render_board(left).lines().map(str::to_string))
        .collect();
    let right_lines: Vec<String> = std::iter::once(right_title.to_string())
        .chain(render_board(right).lines().map(str::to_string))
        .collect();
    let width = left_lines.iter().map(|l| l.len()).max().unwrap_or(0) + 6;
    let mut out = String::new();
    for i in 0..left_lines.len().max(right_lines.len()) {
        let l = left_lines.get(i).map(String::as_str).unwrap_or("");
        let r = right_lines.get(i).map(String::as_str).unwrap_or("");
        let _ = writeln!(out, "{:width$}{}", l, r, width = width);
    }
    out
}

/// Startup banner with the input format reminder.
pub fn greeting() -> String {
    concat!(
        "-------------------\n",
        "     SEA BATTLE    \n",
        "-------------------\n",
        " Input: row column \n",
        " both 1-based      \n",
        "-------------------",
    )
    .to_string()
}
