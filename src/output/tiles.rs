//! Tile rendering for the guess grid
//!
//! Pure presentation: every mark comes from an `Evaluation`, nothing is
//! recomputed here.

use crate::core::{Mark, Word};
use crate::game::Row;
use colored::Colorize;

/// Glyph shown in rows that have not been played yet
pub const PLACEHOLDER: char = '*';

/// How tiles are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Palette {
    /// ANSI background colors: green, yellow and black tiles
    #[default]
    Color,
    /// No escape sequences: `[X]` correct, `(X)` present, ` X ` absent
    Plain,
}

/// Renders rows of letters as terminal tiles
#[derive(Debug, Clone, Copy, Default)]
pub struct TileRenderer {
    palette: Palette,
}

impl TileRenderer {
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Render a single letter with the style for `mark`
    #[must_use]
    pub fn tile(&self, letter: char, mark: Mark) -> String {
        match self.palette {
            Palette::Color => {
                let face = format!(" {letter} ");
                match mark {
                    Mark::Correct => face.black().on_green().bold().to_string(),
                    Mark::Present => face.black().on_yellow().bold().to_string(),
                    Mark::Absent => face.white().on_black().bold().to_string(),
                }
            }
            Palette::Plain => match mark {
                Mark::Correct => format!("[{letter}]"),
                Mark::Present => format!("({letter})"),
                Mark::Absent => format!(" {letter} "),
            },
        }
    }

    /// Render one evaluated guess, newline-terminated
    #[must_use]
    pub fn render_row(&self, row: &Row) -> String {
        let mut line: String = row
            .guess
            .text()
            .chars()
            .zip(row.evaluation.marks())
            .map(|(letter, &mark)| self.tile(letter, mark))
            .collect();
        line.push('\n');
        line
    }

    /// Render a row for an unused guess slot
    #[must_use]
    pub fn render_placeholder(&self, word_length: usize) -> String {
        let mut line = self.tile(PLACEHOLDER, Mark::Absent).repeat(word_length);
        line.push('\n');
        line
    }

    /// Render every played row, then placeholder rows up to `total_rows`
    #[must_use]
    pub fn render_grid(&self, rows: &[Row], total_rows: usize, word_length: usize) -> String {
        let mut grid: String = rows.iter().map(|row| self.render_row(row)).collect();
        for _ in rows.len()..total_rows {
            grid.push_str(&self.render_placeholder(word_length));
        }
        grid
    }

    /// Render the solution as a fully correct row
    #[must_use]
    pub fn render_solution(&self, solution: &Word) -> String {
        let mut line: String = solution
            .text()
            .chars()
            .map(|letter| self.tile(letter, Mark::Correct))
            .collect();
        line.push('\n');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Evaluation, Scoring};

    fn row(guess: &str, solution: &str) -> Row {
        let guess = Word::new(guess, 5).unwrap();
        let solution = Word::new(solution, 5).unwrap();
        let evaluation = Evaluation::calculate(&guess, &solution, Scoring::Standard);
        Row { guess, evaluation }
    }

    #[test]
    fn plain_row_marks_each_letter() {
        let renderer = TileRenderer::new(Palette::Plain);
        assert_eq!(
            renderer.render_row(&row("burst", "beats")),
            "[B] U  R (S)(T)\n"
        );
    }

    #[test]
    fn plain_solution_is_all_correct() {
        let renderer = TileRenderer::new(Palette::Plain);
        let solution = Word::new("booty", 5).unwrap();
        assert_eq!(renderer.render_solution(&solution), "[B][O][O][T][Y]\n");
    }

    #[test]
    fn grid_pads_with_placeholders() {
        let renderer = TileRenderer::new(Palette::Plain);
        let grid = renderer.render_grid(&[row("raise", "booty")], 3, 5);

        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], " R  A  I  S  E ");
        assert_eq!(lines[1], " *  *  *  *  * ");
        assert_eq!(lines[2], " *  *  *  *  * ");
    }

    #[test]
    fn full_grid_has_no_placeholders() {
        let renderer = TileRenderer::new(Palette::Plain);
        let rows = vec![row("raise", "beach"), row("beach", "beach")];
        let grid = renderer.render_grid(&rows, 2, 5);

        assert!(!grid.contains(PLACEHOLDER));
        assert!(grid.ends_with("[B][E][A][C][H]\n"));
    }

    #[test]
    fn color_tiles_use_mark_backgrounds() {
        colored::control::set_override(true);
        let renderer = TileRenderer::new(Palette::Color);

        let correct = renderer.tile('B', Mark::Correct);
        let present = renderer.tile('S', Mark::Present);
        let absent = renderer.tile('U', Mark::Absent);

        for (tile, letter, background) in [
            (&correct, " B ", "42"),
            (&present, " S ", "43"),
            (&absent, " U ", "40"),
        ] {
            assert!(tile.starts_with("\x1b["), "{tile:?}");
            assert!(tile.contains(letter), "{tile:?}");
            assert!(tile.contains(background), "{tile:?}");
        }
    }
}
