use clap::Parser;

/// Tic-tac-toe against a computer that never loses.
///
/// Enter moves as `row col` (0-based). Set RUST_LOG=debug to watch the search.
#[derive(Parser, Debug)]
#[command(name = "tictactoe-minimax")]
#[command(version)]
pub(crate) struct Cli {
    /// Play this many unattended games against a random human instead of
    /// starting an interactive game
    #[arg(long, value_name = "GAMES")]
    pub autoplay: Option<usize>,

    /// Seed for the random human in autoplay mode
    #[arg(long, requires = "autoplay")]
    pub seed: Option<u64>,
}
