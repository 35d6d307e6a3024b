//! Command line front end for the Poke Game progression rules.
//!
//! Usage:
//!   poke-game-rules draw --legendary --count 3
//!   poke-game-rules hp --pokedex-number 1 --level 50
//!   poke-game-rules xp --pokedex-number 1 --level 5 --add 1000
//!   poke-game-rules --rules config/poke_game_rules.ron check

use clap::{Parser, Subcommand};
use poke_game_rules::mcp_interface::{
    handle_check_command, handle_draw_command, handle_hp_command, handle_xp_command,
    load_rules_context,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poke-game-rules", version, about = "Poke Game progression rules")]
struct Cli {
    /// Rules file (RON). Defaults to $POKE_GAME_RULES_PATH, then config/poke_game_rules.ron
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Pokedex JSON file. Defaults to the bundled Generation I Pokedex
    #[arg(long, global = true)]
    pokedex: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw random Pokedex numbers from the configured ranges
    Draw {
        #[arg(long)]
        legendary: bool,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Max HP for a Pokemon at a level
    Hp {
        #[arg(long)]
        pokedex_number: u16,
        #[arg(long)]
        level: u8,
    },

    /// Award experience and show the resulting level, XP and HP
    Xp {
        #[arg(long)]
        pokedex_number: u16,
        #[arg(long)]
        level: u8,
        #[arg(long, default_value_t = 0)]
        experience: u32,
        #[arg(long)]
        add: u32,
    },

    /// Validate the rules file against the Pokedex
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (engine, pokedex) = load_rules_context(cli.rules.as_deref(), cli.pokedex.as_deref())?;

    let output = match cli.command {
        Commands::Draw { legendary, count } => {
            handle_draw_command(&engine, &pokedex, &mut rand::rng(), legendary, count)
        }
        Commands::Hp {
            pokedex_number,
            level,
        } => handle_hp_command(&engine, &pokedex, pokedex_number, level)?,
        Commands::Xp {
            pokedex_number,
            level,
            experience,
            add,
        } => handle_xp_command(&engine, &pokedex, pokedex_number, level, experience, add)?,
        Commands::Check => handle_check_command(&engine, &pokedex),
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
