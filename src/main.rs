use chrono::Utc;
use clap::{Parser, Subcommand};
use dioxus_logger::tracing;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;

use tatami::{
    config::Config,
    error::{Error, ErrorKind},
    model::registration::RegistrationDto,
    service::{bracket::BracketService, registration::RegistrationService},
    startup,
};

/// Tournament bracket operator tool
#[derive(Parser, Debug)]
#[command(version, about = "Generate and run martial-arts tournament brackets")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Regenerate every bracket of a tournament, replacing existing brackets and results
    Generate {
        #[arg(long)]
        tournament: i32,

        /// Seed elimination shuffles for a reproducible bracket
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Record the winner of a match
    Advance {
        #[arg(long)]
        tournament: i32,

        #[arg(long)]
        match_id: i32,

        /// Player ID of the winner
        #[arg(long)]
        winner: i32,
    },

    /// Print brackets, results, and category participant counts as JSON
    Show {
        #[arg(long)]
        tournament: i32,
    },

    /// Register a player, classifying them by today's age and the weigh-in
    Register {
        #[arg(long)]
        tournament: i32,

        #[arg(long)]
        player: i32,

        /// Weigh-in weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::init_logger(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config, args.command).await {
        match e.kind() {
            ErrorKind::Internal => tracing::error!("{}", e),
            kind => tracing::debug!(?kind, "Request rejected"),
        }

        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config, command: Command) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;
    let bracket_service = BracketService::new(&db);

    let output = match command {
        Command::Generate { tournament, seed } => {
            let summary = match seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    bracket_service
                        .generate_brackets_with_rng(tournament, &mut rng)
                        .await?
                }
                None => bracket_service.generate_brackets(tournament).await?,
            };

            serde_json::to_value(summary)?
        }
        Command::Advance {
            tournament,
            match_id,
            winner,
        } => {
            let updated = bracket_service
                .advance_match(tournament, match_id, winner)
                .await?;

            json!({
                "match_id": updated.id,
                "round_number": updated.round_number,
                "match_number": updated.match_number,
                "winner_id": updated.winner_id,
            })
        }
        Command::Show { tournament } => {
            let brackets = bracket_service.get_tournament_brackets(tournament).await?;
            let categories = bracket_service
                .get_category_participants(tournament)
                .await?;

            json!({
                "brackets": brackets,
                "category_participants": categories,
            })
        }
        Command::Register {
            tournament,
            player,
            weight,
        } => {
            let registration_service = RegistrationService::new(&db);
            let registration = registration_service
                .register_player(tournament, player, weight, Utc::now().date_naive())
                .await?;

            serde_json::to_value(RegistrationDto::from(registration))?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
