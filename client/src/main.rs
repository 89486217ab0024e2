mod config;
mod console;

use clap::Parser;
use common::games::tictactoe::new_match;
use common::persistence::SnapshotStore;
use common::{log, logger};

use console::Shell;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or the computer")]
struct Args {
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    #[arg(long, conflicts_with = "two_players")]
    single_player: bool,

    #[arg(long)]
    two_players: bool,

    #[arg(long)]
    name_x: Option<String>,

    #[arg(long)]
    name_o: Option<String>,

    #[arg(long, help = "Restore the saved game on start")]
    load: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager(&args.config).get_config()?;

    let single_player = if args.single_player {
        true
    } else if args.two_players {
        false
    } else {
        config.players.single_player
    };
    let name_x = args.name_x.unwrap_or(config.players.name_x);
    let name_o = args.name_o.unwrap_or(config.players.name_o);

    let state = new_match(&name_x, &name_o, single_player);
    let store = SnapshotStore::from_files(
        config.storage.game_state_file.as_str(),
        config.storage.theme_file.as_str(),
    );

    log!(
        "Starting {} game: {} vs {}",
        if single_player { "single player" } else { "two player" },
        state.player_x_name(),
        state.player_o_name()
    );

    let mut shell = Shell::new(state, store);
    log!("{}", console::describe_theme(shell.theme()));
    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if args.load {
        shell.load(&mut output)?;
    }
    shell.run(std::io::stdin().lock(), &mut output)?;

    log!("Final score: {}", shell.state().score_line());
    Ok(())
}
