//=========================================================================
// Tug Of War
//=========================================================================
//
// Opens the window and plays one match.
//
//   A       pull for player 1
//   L       pull for player 2
//   Escape  quit
//
//=========================================================================

use log::{error, info};
use tug_of_war::EngineBuilder;

fn main() {
    tug_of_war::logging::init_logger();

    match EngineBuilder::new().build().run() {
        Ok(snapshot) => match snapshot.winner {
            Some(winner) => info!("{} ({})", winner, snapshot.progress),
            None => info!("Closed before a winner ({})", snapshot.progress),
        },
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
