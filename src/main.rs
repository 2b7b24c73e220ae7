use clap::{Parser, Subcommand};
use color_eyre::{eyre::eyre, Result};
use std::path::PathBuf;

use pokedex::config::Config;
use pokedex::detail::{load_moves, MoveBatching, PokemonDetail};
use pokedex::i18n::Language;
use pokedex::pokeapi::{
  cry_url, search_pokemon, sprite_url, CryVariant, PokeApiClient, DEFAULT_PAGE_SIZE,
};
use pokedex::{logging, render};

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse Pokémon from PokéAPI in your language")]
#[command(version)]
struct Args {
  /// Path to config file (default: $XDG_CONFIG_HOME/pokedex/config.yaml)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Display language: en, fr, es, de or ja
  #[arg(short, long)]
  language: Option<String>,

  #[command(subcommand)]
  command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
  /// List one page of the catalog
  List {
    #[arg(long, default_value_t = 0)]
    offset: u32,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    limit: u32,
  },
  /// List the whole catalog, optionally filtered by name or number
  All {
    #[arg(short, long)]
    search: Option<String>,
  },
  /// Show a Pokémon's details
  Show {
    id_or_name: String,
    /// Also load the moves it learns
    #[arg(long)]
    moves: bool,
    #[arg(long)]
    shiny: bool,
  },
  /// Show a Pokémon's evolution line
  Evolution { id_or_name: String },
  /// Show a move
  Move { id_or_name: String },
  /// Print the sprite URL for a Pokémon number
  Sprite {
    id: u32,
    #[arg(long)]
    shiny: bool,
    #[arg(long)]
    back: bool,
  },
  /// Print the cry URL for a Pokémon number
  Cry {
    id: u32,
    #[arg(long)]
    legacy: bool,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  color_eyre::install()?;

  let args = Args::parse();

  // Load configuration
  let config = Config::load(args.config.as_deref())?;

  // Override language if specified on command line
  let config = if let Some(language) = args.language {
    Config { language, ..config }
  } else {
    config
  };

  let _log_guard = logging::init(&config.log)?;

  if Language::from_tag(&config.language).is_none() {
    tracing::warn!(language = %config.language, "unsupported language, using en");
  }

  let client = PokeApiClient::new(&config)?;
  tracing::debug!(
    ttl_minutes = client.cache().ttl().num_minutes(),
    base_url = %config.api.base_url,
    "client ready"
  );
  let language = config.language.as_str();

  match args.command {
    Cmd::List { offset, limit } => {
      let page = client.fetch_pokemon_page(offset, limit).await;
      let items: Vec<_> = page.iter().collect();
      print!("{}", render::format_list(&items));
    }
    Cmd::All { search } => {
      let all = client.fetch_all_pokemon().await;
      let items = search_pokemon(&all, search.as_deref().unwrap_or(""));
      print!("{}", render::format_list(&items));
    }
    Cmd::Show {
      id_or_name,
      moves,
      shiny,
    } => {
      let detail = PokemonDetail::load(&client, &id_or_name.to_lowercase(), language)
        .await
        .map_err(|e| {
          if e.is_not_found() {
            eyre!("Pokémon not found: {}", id_or_name)
          } else {
            eyre!(e)
          }
        })?;
      print!("{}", render::format_detail(&detail, shiny));

      if moves {
        let batching = MoveBatching::from(&config.moves);
        let moves = load_moves(&client, &detail.pokemon, batching).await;
        println!("\nMoves:");
        print!("{}", render::format_moves(&moves, language));
      }
    }
    Cmd::Evolution { id_or_name } => {
      let detail = PokemonDetail::load(&client, &id_or_name.to_lowercase(), language).await?;
      for member in &detail.evolution {
        println!("{:>6}  {}", render::dex_number(member.id), member.display_name);
      }
    }
    Cmd::Move { id_or_name } => {
      let mv = client.fetch_move(id_or_name.to_lowercase()).await?;
      print!("{}", render::format_moves(std::slice::from_ref(&mv), language));
    }
    Cmd::Sprite { id, shiny, back } => {
      println!("{}", sprite_url(id, shiny, back));
    }
    Cmd::Cry { id, legacy } => {
      let variant = if legacy {
        CryVariant::Legacy
      } else {
        CryVariant::Latest
      };
      println!("{}", cry_url(id, variant));
    }
  }

  Ok(())
}
