use crate::game_engine::{Applied, GameEngine, GameOutcome};
use crate::io::{ConsoleOutput, InputReader, OutputWriter, TerminalIO};
use crate::models::constants::PLAY_AGAIN_TOKEN;
use crate::models::errors::{GameError, GameResult};
use crate::services::command::Command;
use crate::ui::presenters::{BoardPresenter, PLAY_AGAIN_PROMPT};
use tracing::{debug, info};

/// A console play session: one engine, one reader, one writer.
pub struct Game<I: InputReader, O: OutputWriter> {
    engine: GameEngine,
    input: I,
    output: O,
}

impl Game<TerminalIO, ConsoleOutput> {
    /// A session on stdin/stdout with Ctrl-C ending it like closed input.
    pub fn terminal() -> Self {
        Game::new(TerminalIO::new(), ConsoleOutput)
    }
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Game {
            engine: GameEngine::new(),
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Play games until the player declines another one or input runs out.
    pub fn run(&mut self) -> GameResult<()> {
        let mut games = 0u32;
        loop {
            match self.play_round() {
                Ok(_) => games += 1,
                Err(GameError::Interrupted) => {
                    info!(games, "session interrupted");
                    break;
                }
                Err(err) => return Err(err),
            }

            match self.input.read_line(PLAY_AGAIN_PROMPT).map_err(GameError::from) {
                Ok(answer) if answer.trim() == PLAY_AGAIN_TOKEN => self.engine.reset(),
                Ok(_) | Err(GameError::Interrupted) => break,
                Err(err) => return Err(err),
            }
        }

        info!(games, "session ended");
        BoardPresenter::show_farewell(&mut self.output);
        Ok(())
    }

    /// Prompt for moves until the current game is decided.
    ///
    /// Rejected input is reported and the same player is asked again.
    pub fn play_round(&mut self) -> GameResult<GameOutcome> {
        loop {
            if let Some(outcome) = self.engine.check_game_over() {
                BoardPresenter::show_result(outcome, &mut self.output);
                return Ok(outcome);
            }

            BoardPresenter::show_move_hint(&mut self.output);
            let prompt = BoardPresenter::turn_prompt(self.engine.board().turn());
            let line = self.input.read_line(&prompt)?;
            let command = Command::parse(&line);

            match self.engine.apply(&command) {
                Ok(applied) => {
                    if let Applied::Undone(cell) = applied {
                        debug!(position = cell.move_number(), "move taken back");
                    }
                    BoardPresenter::show_board(self.engine.board(), &mut self.output);
                }
                Err(err) => {
                    debug!(?command, %err, "command rejected");
                    BoardPresenter::show_rejection(&err, &mut self.output);
                }
            }
        }
    }
}
