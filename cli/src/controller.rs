use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use minado_core::{GameError, Session};

use crate::coords::parse_coords;
use crate::render::render;

const MENU: &str = "1. Reveal  2. Flag  3. Save  4. Load  5. Quit";

/// Menu-driven game loop reading commands from `input` and drawing to `output`.
pub struct Controller<R, W> {
    session: Session,
    save_file: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(session: Session, save_file: PathBuf, input: R, output: W) -> Self {
        Self {
            session,
            save_file,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads one trimmed line, `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn show(&mut self, game_over: bool) -> io::Result<()> {
        writeln!(self.output, "{}", render(self.session.board(), game_over))
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show(self.session.is_ended())?;

            if self.session.is_ended() {
                writeln!(self.output, "Game over. Start a new game to play again.")?;
                return Ok(());
            }

            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("> ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.cell_action(true)?,
                "2" => self.cell_action(false)?,
                "3" => match self.session.save(&self.save_file) {
                    Ok(()) => writeln!(self.output, "Game saved.")?,
                    Err(err) => writeln!(self.output, "Could not save: {err}")?,
                },
                "4" => match self.session.load(&self.save_file) {
                    Ok(()) => writeln!(self.output, "Game loaded.")?,
                    Err(err) => writeln!(self.output, "Could not load: {err}")?,
                },
                "5" => return Ok(()),
                other => writeln!(self.output, "Unknown option {other:?}")?,
            }

            if !self.session.is_ended() && self.session.check_cleared() {
                self.show(true)?;
                writeln!(self.output, "Field cleared, you win!")?;
                return Ok(());
            }
        }
    }

    fn cell_action(&mut self, reveal: bool) -> io::Result<()> {
        let Some(text) = self.prompt("Cell (e.g. A5): ")? else {
            return Ok(());
        };
        let coords = match parse_coords(&text) {
            Ok(coords) => coords,
            Err(err) => return writeln!(self.output, "Invalid input: {err}"),
        };

        let result = if reveal {
            self.session.reveal(coords)
        } else {
            self.session.toggle_flag(coords).map(|()| false)
        };

        match result {
            Ok(true) => writeln!(self.output, "BOOM! You hit a mine."),
            Ok(false) => Ok(()),
            Err(err @ (GameError::OutOfBounds | GameError::AlreadyRevealed)) => {
                writeln!(self.output, "Invalid move: {err}")
            }
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minado_core::{Board, Coord2, MINES, MineLayout};

    const TOP_ROW: [Coord2; MINES] = [
        (0, 0),
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (0, 5),
        (0, 6),
        (0, 7),
        (0, 8),
        (0, 9),
    ];

    fn run(script: &str) -> (Session, String) {
        let layout = MineLayout::from_mine_coords(&TOP_ROW).unwrap();
        let session = Session::from_board(Board::from_layout(&layout));
        let mut output = Vec::new();

        let mut controller = Controller::new(
            session,
            PathBuf::from("unused.sav"),
            script.as_bytes(),
            &mut output,
        );
        controller.run().unwrap();
        let session = controller.session().clone();

        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn revealing_a_mine_ends_the_game() {
        let (session, output) = run("1\nA1\n");

        assert!(session.is_ended());
        assert!(output.contains("BOOM"));
        assert!(output.contains("Game over"));

        let after_boom = &output[output.find("BOOM").unwrap()..];
        let boards: Vec<&str> = after_boom
            .lines()
            .filter(|line| line.trim_start().starts_with('A'))
            .collect();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].split_whitespace().collect::<String>(), "A**********");
    }

    #[test]
    fn clearing_the_field_wins() {
        let (session, output) = run("1\nJ10\n");

        assert!(session.is_ended());
        assert!(output.contains("you win"));
    }

    #[test]
    fn bad_input_is_reported_and_play_continues() {
        let (session, output) = run("1\nZZ\n1\nK1\n2\nB2\n9\n5\n");

        assert!(!session.is_ended());
        assert!(output.contains("Invalid input"));
        assert!(output.contains("Invalid move: Coordinates out of bounds"));
        assert!(output.contains("Unknown option"));
        assert!(session.board().cell_view((1, 1)).unwrap().flagged);
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let (session, _) = run("");

        assert!(!session.is_ended());
    }
}
