use anyhow::{bail, Context};
use clap::Parser;
use league_finder::display::output::{
    display_document, display_error, display_info, display_players, display_success, Spinner,
};
use league_finder::view::Action;
use league_finder::{
    AppError, AssetLoader, BackendClient, Config, MatchHistoryRenderer, Outcome, Region, Session,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{warn, Level};

type Renderer = MatchHistoryRenderer<BackendClient, AssetLoader>;

#[derive(Parser, Debug)]
#[command(name = "League Finder")]
#[command(about = "Browse a summoner's recent League of Legends matches", long_about = None)]
struct Args {
    /// Summoner name (default: the last search of this session)
    name: Option<String>,

    /// Region (default: LEAGUE_FINDER_REGION or NA)
    #[arg(short, long, value_enum)]
    region: Option<Region>,

    /// Number of extra pages to load after the first one
    #[arg(short = 'm', long, default_value = "0")]
    more: usize,

    /// Write the rendered history as HTML to this file
    #[arg(long)]
    html: Option<PathBuf>,

    /// Backend base URL (default: LEAGUE_FINDER_BACKEND)
    #[arg(long)]
    backend: Option<String>,

    /// Keep prompting for more pages, players and searches
    #[arg(short, long)]
    interactive: bool,

    /// Log requests and preloading to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(backend) = args.backend {
        config.backend_url = backend;
    }

    let session = match Session::open(Session::default_path()) {
        Ok(session) => session,
        Err(e) => {
            warn!("starting without a saved session: {}", e);
            Session::in_memory()
        }
    };

    // Auto-search the previous summoner when no name is given.
    let (term, region) = match (args.name, session.last_search()) {
        (Some(name), _) => (name, args.region.unwrap_or(config.region)),
        (None, Some(last)) => {
            display_info(&format!("Resuming last search: {} ({})", last.term, last.region));
            (last.term.clone(), args.region.unwrap_or(last.region))
        }
        (None, None) => bail!("no summoner given and no previous search to resume"),
    };
    config.region = region;

    let client = BackendClient::new(&config);
    let loader = AssetLoader::new(config.image_rate);
    let mut renderer = MatchHistoryRenderer::new(client, loader, &config, session)
        .with_indicator(Box::new(Spinner::new()));

    report(&renderer.search(&term, region));

    for _ in 0..args.more {
        if !renderer.document().show_more().visible {
            break;
        }
        report(&renderer.load_more()?);
    }

    display_document(renderer.document());

    if args.interactive {
        interact(&mut renderer)?;
    }

    if let Some(path) = args.html {
        std::fs::write(&path, renderer.document().to_html())
            .with_context(|| format!("failed to write {}", path.display()))?;
        display_success(&format!("Wrote {}", path.display()));
    }

    Ok(())
}

fn report(outcome: &Outcome) {
    if let Outcome::Rendered {
        cards,
        images_loaded,
        images_failed,
    } = outcome
    {
        display_success(&format!(
            "{} matches ({} images preloaded, {} failed)",
            cards, images_loaded, images_failed
        ));
    }
}

fn interact(renderer: &mut Renderer) -> anyhow::Result<()> {
    let stdin = io::stdin();
    loop {
        display_players(renderer.document());
        print!("[m] more, [number] follow player, [s <name>] search, [q] quit > ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();

        let outcome = match line {
            "q" => return Ok(()),
            "m" => match renderer.load_more() {
                Ok(outcome) => outcome,
                Err(e @ (AppError::Busy | AppError::NoActiveSearch)) => {
                    display_error(&e.to_string());
                    continue;
                }
                Err(e) => return Err(e.into()),
            },
            _ if line.starts_with("s ") => {
                let region = renderer.current_region();
                renderer.search(&line[2..], region)
            }
            _ => match line.parse::<usize>() {
                Ok(n) => {
                    let action = player_action(renderer, n);
                    match action {
                        Some(action) => renderer.dispatch(&action),
                        None => {
                            display_error(&format!("No player #{}", n));
                            continue;
                        }
                    }
                }
                Err(_) => {
                    display_error(&format!("Unknown command: {}", line));
                    continue;
                }
            },
        };

        report(&outcome);
        display_document(renderer.document());
    }
}

/// The click target of the `n`th listed player, counting from 1.
fn player_action(renderer: &Renderer, n: usize) -> Option<Action> {
    let index = n.checked_sub(1)?;
    renderer.document().actions().get(index).cloned()
}
