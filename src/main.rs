use tictactoe::services::game::Game;
use tictactoe::{cli, logging, GameResult};

fn main() -> GameResult<()> {
    let args = cli::args::parse();
    logging::init(args.log_filter.as_deref());

    let mut game = Game::terminal();
    game.run()
}
