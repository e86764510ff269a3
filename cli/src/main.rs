use clap::{Parser, Subcommand};
use roster_cli::{CliContext, commands, logging, readline};
use roster_core::GalleryConfig;
use std::path::PathBuf;

/// Browse the character catalog from the terminal.
#[derive(Parser)]
#[command(version, about = "roster")]
struct Args {
    /// Catalog URL (overrides the config file)
    #[arg(short, long)]
    url: Option<String>,
    /// TOML file with `catalog_url` / `video_embed_base`
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => GalleryConfig::load(path).map_err(|e| describe(&e))?,
        None => GalleryConfig::default(),
    };
    if let Some(url) = args.url {
        config.catalog_url = url;
    }

    let ctx = CliContext::new(config);
    ctx.load().await;
    commands::list_groups(&ctx).await;

    while let Some(line) = readline()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(true) => break,
            Ok(false) => {}
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

/// Error message followed by its source, if any
fn describe(e: &dyn std::error::Error) -> String {
    match e.source() {
        Some(source) => format!("{e}: {source}"),
        None => e.to_string(),
    }
}

#[derive(Parser)]
#[command(about = "roster")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List role groups
    Groups,
    /// Select a group ("All" clears the role filter and the query)
    Group { name: String },
    /// Filter visible records by name; no argument clears the query
    Search { query: Vec<String> },
    /// Press the search button
    Find,
    /// List visible records
    List,
    /// Open a visible record's detail popup
    Open {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Expand or collapse an ability of the open record
    Ability {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Close the popup
    Close,
    /// Pointer-down outside the popup
    ClickOutside,
    /// Show the open popup
    Show,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "roster".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Groups) => commands::list_groups(ctx).await,
        Some(Commands::Group { name }) => commands::select_group(ctx, name).await,
        Some(Commands::Search { query }) => commands::search(ctx, &query.join(" ")).await,
        Some(Commands::Find) => commands::find(ctx).await,
        Some(Commands::List) => commands::list(ctx).await,
        Some(Commands::Open { name }) => commands::open(ctx, &name.join(" ")).await,
        Some(Commands::Ability { name }) => commands::toggle_ability(ctx, &name.join(" ")).await,
        Some(Commands::Close) => commands::close(ctx).await,
        Some(Commands::ClickOutside) => commands::click_outside(ctx).await,
        Some(Commands::Show) => commands::show(ctx).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
