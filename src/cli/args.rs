use clap::Parser;

/// Two-player tic-tac-toe on the console
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Args {
    /// Tracing filter directive, e.g. `debug` or `tictactoe=trace`.
    /// Falls back to RUST_LOG, then `warn`.
    #[arg(long)]
    pub log_filter: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
