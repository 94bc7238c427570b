use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotgist::{
    cli,
    config::{self, Settings},
    error,
    gist::GistClient,
    spotify::SpotifyClient,
    warning,
};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Defaults to `publish` with the environment's settings
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the summary and write it into the gist
    Publish(RunOptions),

    /// Print the summary without updating the gist
    Preview(RunOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunOptions {
    /// combined, recently_played, top_tracks or top_artists (overrides TYPE)
    #[clap(long)]
    pub mode: Option<String>,

    /// short_term, medium_term or long_term (overrides TIME_RANGE)
    #[clap(long)]
    pub time_range: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env() {
        warning!("Cannot load .env file. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Publish(RunOptions::default())) {
        Command::Publish(opt) => {
            let settings = match Settings::from_env() {
                Ok(s) => s.with_overrides(opt.mode, opt.time_range),
                Err(e) => error!("Invalid configuration: {}", e),
            };
            let mut music = SpotifyClient::new(&settings);
            let gists = GistClient::new(&settings);

            if let Err(e) = cli::publish(&mut music, &gists, &settings).await {
                error!("{}", e);
            }
        }
        Command::Preview(opt) => {
            let settings = match Settings::spotify_from_env() {
                Ok(s) => s.with_overrides(opt.mode, opt.time_range),
                Err(e) => error!("Invalid configuration: {}", e),
            };
            let mut music = SpotifyClient::new(&settings);

            if let Err(e) = cli::preview(&mut music, &settings).await {
                error!("{}", e);
            }
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
