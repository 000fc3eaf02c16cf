use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use poke_app::{ExplorerApp, SystemClipboard};
use poke_core::{generation_numeral, Algorithm, Constants, Pokemon, SimilarPokemon, K_CHOICES};

#[derive(Parser)]
#[command(name = "poke")]
#[command(about = "Explore the Pokémon similarity index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the similarity backend
    #[arg(long, default_value = "http://localhost:8000")]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List every Pokémon in the catalog
    List,
    /// Show one Pokémon's attributes
    Show {
        /// Pokémon name, e.g. "pikachu"
        name: String,
    },
    /// Find the most similar Pokémon
    Similar {
        /// Pokémon name to query around
        name: String,
        /// Number of results (10, 20, 30, 40 or 50)
        #[arg(short, long)]
        k: Option<u32>,
        /// Scoring algorithm: euclidean or cosine
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
        /// Import settings from the clipboard before querying
        #[arg(long)]
        from_clipboard: bool,
    },
    /// Query with independently randomized strengths
    Randomize {
        /// Pokémon name to query around
        name: String,
    },
    /// Put the backend's default settings on the clipboard in portable form
    ExportDefaults,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into())
                .add_directive("poke_cli=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            let app = ExplorerApp::bootstrap(&cli.api_url, "").await?;
            for pokemon in app.pokemon() {
                println!(
                    "{:<4} {:<16} gen {}",
                    pokemon.pokedex_number,
                    pokemon.name,
                    generation_numeral(pokemon.generation).unwrap_or("?")
                );
            }
        }
        Commands::Show { name } => {
            let app = ExplorerApp::bootstrap(&cli.api_url, "").await?;
            let pokemon = app
                .find(&name)
                .with_context(|| format!("No such pokemon: {}", name))?;
            print_detail(pokemon, app.constants());
        }
        Commands::Similar {
            name,
            k,
            algorithm,
            from_clipboard,
        } => {
            let mut app = ExplorerApp::bootstrap(&cli.api_url, "").await?;

            if from_clipboard {
                let mut clipboard = SystemClipboard::new()?;
                let outcome = app.settings.import(&mut clipboard)?;
                if !outcome.strengths_applied {
                    println!("(clipboard strengths were not schema-complete; kept defaults)");
                }
            }
            if let Some(algorithm) = algorithm {
                app.settings.set_algorithm(algorithm);
            }
            if let Some(k) = k {
                if !app.settings.set_k(k) {
                    bail!("k must be one of {:?}", K_CHOICES);
                }
            }

            app.select(&name).await;
            if app.selection.selected().is_none() {
                bail!("No such pokemon: {}", name);
            }
            print_results(&app.orchestrator.results(), app.selection.location());
        }
        Commands::Randomize { name } => {
            let mut app = ExplorerApp::bootstrap(&cli.api_url, "").await?;
            app.settings.randomize();
            app.select(&name).await;
            if app.selection.selected().is_none() {
                bail!("No such pokemon: {}", name);
            }
            print_results(&app.orchestrator.results(), app.selection.location());
        }
        Commands::ExportDefaults => {
            let mut app = ExplorerApp::bootstrap(&cli.api_url, "").await?;
            let mut clipboard = SystemClipboard::new()?;
            app.settings.export(&mut clipboard);
            if app.settings.export_confirmed() {
                println!("Copied!");
            } else {
                bail!("Failed to copy settings to the clipboard");
            }
        }
    }

    Ok(())
}

fn print_detail(pokemon: &Pokemon, constants: &Constants) {
    println!("{} — {}", pokemon.name, pokemon.genus);
    println!(
        "  pokedex #{} | generation {}",
        pokemon.pokedex_number,
        generation_numeral(pokemon.generation).unwrap_or("?")
    );
    let types: Vec<&str> = pokemon
        .types
        .iter()
        .filter_map(|&code| constants.type_label(code))
        .collect();
    println!("  types: {}", types.join(", "));
    let egg_groups: Vec<&str> = pokemon
        .egg_groups
        .iter()
        .filter_map(|&code| constants.egg_group_label(code))
        .collect();
    println!("  egg groups: {}", egg_groups.join(", "));
    println!(
        "  color: {} | shape: {} | habitat: {}",
        constants.color_label(pokemon.color).unwrap_or("?"),
        constants.shape_label(pokemon.shape).unwrap_or("?"),
        constants.habitat_label(pokemon.habitat).unwrap_or("none"),
    );
    println!(
        "  height: {:.1} m | weight: {:.1} kg | stat total: {}",
        pokemon.height as f64 / 10.0,
        pokemon.weight as f64 / 10.0,
        pokemon.stat_total
    );
}

fn print_results(results: &[SimilarPokemon], location: &poke_app::Location) {
    if results.is_empty() {
        println!("No results.");
        return;
    }
    for (rank, result) in results.iter().enumerate() {
        if rank == 0 {
            // Index 0 is the query entity itself; its score is meaningless.
            println!("     {:<16} (query)", result.name);
        } else {
            println!("{:<4} {:<16} {:.4}", rank, result.name, result.similarity);
        }
    }
    println!("\nShare link: /{}", location.query_string());
}
