use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use hexapawn_ai::board::{Board, Cell};

/// Draws a board to stdout as a styled grid.
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    for row in 0..board.size() {
        for column in 0..board.size() {
            let background = if (row + column) % 2 == 0 {
                Color::DarkYellow
            } else {
                Color::DarkGreen
            };
            let glyph = match board.get(row, column) {
                Cell::Black => style("b").attribute(Attribute::Bold).with(Color::Black),
                Cell::White => style("w").attribute(Attribute::Bold).with(Color::White),
                Cell::Empty => style(" "),
            };
            stdout.queue(PrintStyledContent(glyph.on(background)))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
