use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use dailyshuffle::{cli, config, error, logging, warning};

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
    /// Playlist feed URL, overrides PLAYLISTS_URL
    #[clap(long, global = true)]
    url: Option<String>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play the daily playlist in an endless loop (default)
    Play(PlayOptions),

    /// Print the playlist that applies today
    Today(TodayOptions),

    /// List every date of the playlist feed
    List(ListOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct PlayOptions {
    /// Stop after this many play cycles instead of looping forever
    #[clap(long)]
    pub cycles: Option<u64>,

    /// Seed for a reproducible shuffle order
    #[clap(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct TodayOptions {
    /// Resolve for this date key instead of today (e.g. 20210702)
    #[clap(long)]
    pub date: Option<String>,

    /// Seed for a reproducible shuffle order
    #[clap(long)]
    pub seed: Option<u64>,

    /// Print the playlist in its original order
    #[clap(long)]
    pub no_shuffle: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Classify dates relative to this date key instead of today
    #[clap(long)]
    pub date: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let config = match config::Config::from_env(cli.url.clone()) {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    if let Err(e) = logging::init(&config) {
        warning!("Logging to {} is disabled. Err: {}", config.log_file.display(), e);
    }

    match cli.command.unwrap_or(Command::Play(PlayOptions::default())) {
        Command::Play(opt) => cli::play(config, opt.cycles, opt.seed).await,
        Command::Today(opt) => cli::today(config, opt.date, opt.seed, opt.no_shuffle).await,
        Command::List(opt) => cli::list(config, opt.date).await,
        Command::Completions(_) => {}
    }
}
