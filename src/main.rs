use anyhow::Result;
use rookery_core::{Board, Square};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("rookery starting");

    let board = Board::standard();
    println!("{board}");
    info!(side = %board.side_to_move(), legal = board.legal_moves().len(), "opening position");

    let opening = board.find_move(Square::E2, Square::E4);
    let board = board.make_move(&opening)?;
    info!(played = %opening, side = %board.side_to_move(), "applied move");
    println!("{board}");

    Ok(())
}
