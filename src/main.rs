use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lifealgo_core::{init_logging, AlgoConfig, Universe};
use lifealgo_lib::export::{export_icons, summarize};
use lifealgo_lib::AppContext;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "lifealgo.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered algorithms with their derived resources
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write algorithm icons as PNG files
    Icons {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
        /// Only export this algorithm
        #[arg(long)]
        algo: Option<String>,
    },
    /// Create a universe and report how it was configured
    Create {
        /// Algorithm name
        name: String,
        /// Do not wire the universe to the shared poller
        #[arg(long)]
        no_poll: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AlgoConfig::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    init_logging(&config.log_level);

    let mut ctx = match AppContext::startup(config) {
        Ok(ctx) => ctx,
        Err(e) if e.is_fatal() => {
            eprintln!("Fatal error: {e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Failed to initialize algorithms"),
    };

    match args.command {
        Command::List { json } => {
            let rows = summarize(ctx.registry());
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!(
                    "{:>3} {:>6} {:<12} {:<8} {:>6} {:>7} {:>5} {:>5}",
                    "#", "id", "name", "status", "states", "mem", "7x7", "15x15"
                );
                for r in rows {
                    println!(
                        "{:>3} {:>6} {:<12} {:<8} {:>6} {:>7} {:>5} {:>5}{}",
                        r.index,
                        r.action_id,
                        r.name,
                        r.status_color,
                        r.max_states,
                        r.max_memory,
                        r.icons_7x7,
                        r.icons_15x15,
                        if r.can_hash { "  hashing" } else { "" }
                    );
                }
            }
        }
        Command::Icons { out, algo } => {
            let registry = ctx.registry();
            let selected: Vec<usize> = match algo {
                Some(name) => vec![registry
                    .find(&name)
                    .with_context(|| format!("Unknown algorithm {name}"))?],
                None => (0..registry.count()).collect(),
            };
            for index in selected {
                let written = export_icons(registry.algo(index), &out)?;
                println!("{}: {} icons", registry.name_of(index), written.len());
            }
        }
        Command::Create { name, no_poll } => {
            let index = ctx
                .registry()
                .find(&name)
                .with_context(|| format!("Unknown algorithm {name}"))?;
            ctx.select(index);
            let universe = match ctx.new_universe(!no_poll) {
                Ok(u) => u,
                Err(e) if e.is_fatal() => {
                    eprintln!("Fatal error: {e}");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            };
            report(&name, universe.as_ref());
        }
    }

    Ok(())
}

fn report(name: &str, universe: &dyn Universe) {
    match universe.max_memory() {
        Some(mb) => println!("{name}: memory budget {mb} MB"),
        None => println!("{name}: unlimited memory"),
    }
    println!(
        "{name}: {}",
        if universe.has_poller() {
            "interruptible"
        } else {
            "not interruptible"
        }
    );
}
