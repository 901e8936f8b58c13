use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use genresift::{cli, config, error, types::PkceToken, utils};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    #[clap(about = "Filter a playlist by genre into a new playlist")]
    Filter(FilterOptions),

    /// Show the local genre vocabulary
    Genres(GenresOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct FilterOptions {
    /// Exact name of the playlist to filter
    playlist_name: String,

    /// Genre to filter by (e.g. 'rock', 'techno')
    genre: String,

    /// Spotify user id owning the destination playlist
    #[clap(long)]
    user: Option<String>,

    /// Tag provider to resolve genres with
    #[clap(long, default_value = "musicbrainz", value_parser = utils::parse_tag_source)]
    provider: utils::TagSource,

    /// Name of the destination playlist (defaults to the genre, title-cased)
    #[clap(long)]
    target: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct GenresOptions {
    /// Print the closest vocabulary match for the given input
    #[clap(long)]
    suggest: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Filter(opt) => {
            cli::filter(
                opt.playlist_name,
                opt.genre,
                opt.user,
                opt.provider,
                opt.target,
            )
            .await
        }
        Command::Genres(opt) => cli::genres(opt.suggest).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
