//! Console front-end: prompts, coordinate parsing, screen handling and the
//! hot-seat turn loop that drives a [`Game`].

#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::{
    common::{Coord, ShotOutcome},
    config::SHOT_PAUSE_MS,
    game::{Game, GameError, Side, TurnState},
};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Errors raised while reading player input.
#[derive(Debug)]
pub enum InputError {
    /// Line did not contain two integers.
    Parse(String),
    /// Both values parsed but at least one is off the board.
    OutOfRange { x: usize, y: usize, size: usize },
    /// Input closed before a value was read.
    Eof,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Parse(input) => {
                write!(f, "Could not read '{}' as two numbers (x y)", input)
            }
            InputError::OutOfRange { x, y, size } => write!(
                f,
                "({}, {}) is off the board, both values must be 0-{}",
                x,
                y,
                size.saturating_sub(1)
            ),
            InputError::Eof => write!(f, "Input closed"),
            InputError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Parse `"x y"` (whitespace or comma separated) into an on-board coordinate.
pub fn parse_coord(input: &str, board_size: usize) -> Result<Coord, InputError> {
    let trimmed = input.trim();
    let mut parts = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let (Some(xs), Some(ys), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Parse(trimmed.to_string()));
    };
    let (Ok(x), Ok(y)) = (xs.parse::<usize>(), ys.parse::<usize>()) else {
        return Err(InputError::Parse(trimmed.to_string()));
    };
    if x >= board_size || y >= board_size {
        return Err(InputError::OutOfRange {
            x,
            y,
            size: board_size,
        });
    }
    Ok(Coord::new(x, y))
}

/// Presentation knobs for [`play`].
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// Sleep after each shot. Zero disables it.
    pub pause: Duration,
    /// Emit the ANSI clear sequence before each board display.
    pub clear_screen: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            pause: Duration::from_millis(SHOT_PAUSE_MS),
            clear_screen: true,
        }
    }
}

/// Line-oriented terminal wrapper over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(line)
    }

    fn prompt(&mut self, text: &str) -> Result<(), InputError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Ask for a name; the first whitespace-delimited token is kept.
    pub fn prompt_name(&mut self, text: &str) -> Result<String, InputError> {
        loop {
            self.prompt(text)?;
            let line = self.read_line()?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }

    /// Ask for a target until an on-board `x y` pair is entered.
    ///
    /// A line holding a single number is kept and joined with the next line,
    /// so `3` then `4` reads as `3 4`.
    pub fn prompt_coord(&mut self, text: &str, board_size: usize) -> Result<Coord, InputError> {
        let mut pending: Option<String> = None;
        loop {
            if pending.is_none() {
                self.prompt(text)?;
            }
            let line = self.read_line()?;
            let input = match pending.take() {
                Some(first) => format!("{} {}", first, line.trim()),
                None => line,
            };
            let trimmed = input.trim();
            if trimmed.parse::<usize>().is_ok() {
                pending = Some(trimmed.to_string());
                continue;
            }
            match parse_coord(&input, board_size) {
                Ok(coord) => return Ok(coord),
                Err(e @ (InputError::Parse(_) | InputError::OutOfRange { .. })) => {
                    log::warn!("rejected input: {}", e);
                    writeln!(self.output, "{}. Try again.", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn clear_screen(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            write!(self.output, "{}", CLEAR_SCREEN)?;
            self.output.flush()?;
        }
        Ok(())
    }

    pub fn pause(&mut self, duration: Duration) -> io::Result<()> {
        self.output.flush()?;
        if !duration.is_zero() {
            thread::sleep(duration);
        }
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}

fn outcome_message(outcome: ShotOutcome) -> String {
    match outcome {
        ShotOutcome::Hit => "Hit!".to_string(),
        ShotOutcome::Miss => "Miss.".to_string(),
        ShotOutcome::Sunk(name) => format!("Hit! You sank the {}!", name),
    }
}

/// Drive `game` from its first turn to game over, returning the winner.
///
/// Repeat shots are refused and the same player is asked again.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    console: &mut Console<R, W>,
    options: PlayOptions,
) -> anyhow::Result<Side> {
    if game.state() == TurnState::Setup {
        return Err(anyhow::anyhow!("fleets have not been placed"));
    }
    let board_size = game.config().board_size;

    while let Some(side) = game.current_side() {
        console.clear_screen(options.clear_screen)?;
        let shooter = game.player(side);
        let screen = shooter.render_boards(game.opponent_of(side));
        let prompt = format!(
            "{}'s turn. Enter coordinates to shoot (x y): ",
            shooter.name()
        );
        console.prompt(&screen)?;

        loop {
            let target = console.prompt_coord(&prompt, board_size)?;
            match game.fire(target.x, target.y) {
                Ok(report) => {
                    console.say(&outcome_message(report.outcome))?;
                    break;
                }
                Err(GameError::Board(e)) => {
                    log::warn!("shot refused: {}", e);
                    console.say(&format!("{}. Try again.", e))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
        console.pause(options.pause)?;
    }

    let winner = game
        .winner()
        .ok_or_else(|| anyhow::anyhow!("game stopped without a winner"))?;
    console.clear_screen(options.clear_screen)?;
    console.say(&format!("{} wins!", game.player(winner).name()))?;
    for side in [Side::One, Side::Two] {
        let p = game.player(side);
        console.say(&format!(
            "{}: {} hits from {} shots",
            p.name(),
            p.hits_scored(),
            p.shots_fired()
        ))?;
    }
    Ok(winner)
}
