use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pokeroster::catalog::load_catalog;
use pokeroster::shell::Shell;
use pokeroster::{Registry, RegistryConfig, RosterFilter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pokeroster", about = "Species roster manager backed by an owner BST")]
struct Cli {
    /// Species catalog (header row + `id,name,type,hp,attack,can_evolve` rows).
    #[arg(long, default_value = "data/hoenn_pokedex.csv")]
    catalog: PathBuf,
    /// Catalog ids offered as starters, in menu order.
    #[arg(long, value_delimiter = ',', default_values_t = [1u32, 4, 7])]
    starters: Vec<u32>,
    /// Raise log verbosity (-v debug, -vv trace). Overridden by RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List catalog species, optionally filtered.
    Species(SpeciesArgs),
    /// Run the command shell on stdin or a script file.
    Shell {
        /// Read commands from this file instead of stdin.
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct SpeciesArgs {
    /// Display filter: `type <T>`, `evolvable`, `attack <n>`, `hp <n>`,
    /// `prefix <p>` or `all` (the default).
    filter: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = load_catalog(&cli.catalog)
        .with_context(|| format!("failed to load catalog from {}", cli.catalog.display()))?;
    let config = RegistryConfig::default().with_starters(cli.starters);
    let registry = Registry::new(catalog, config).context("invalid starter configuration")?;

    match cli.command {
        Commands::Species(args) => run_species(&registry, &args),
        Commands::Shell { script } => run_shell(registry, script),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_species(registry: &Registry, args: &SpeciesArgs) -> Result<()> {
    let words: Vec<&str> = args.filter.iter().map(String::as_str).collect();
    let filter = RosterFilter::from_words(&words)
        .map_err(anyhow::Error::msg)
        .context("invalid species filter")?;

    let mut shown = 0usize;
    for record in registry.catalog().filter(&filter) {
        println!("{}", record);
        shown += 1;
    }
    if shown == 0 {
        println!("No species match the criteria.");
    }
    Ok(())
}

fn run_shell(registry: Registry, script: Option<PathBuf>) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            let mut shell = Shell::new(registry, false);
            shell.run(BufReader::new(file), &mut stdout)?;
        }
        None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(registry, stdin.is_terminal());
            shell.run(stdin.lock(), &mut stdout)?;
        }
    }
    Ok(())
}
