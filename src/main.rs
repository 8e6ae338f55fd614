use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use streeng::index::stats::show_stats;
use streeng::output::{self, QueryOutput};
use streeng::utils::progress::Spinner;
use streeng::utils::{split_words, string_from_file};
use streeng::{IndexConfig, PatternCache, Streeng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "streeng")]
#[command(about = "Trie word index: exact, prefix, suffix, pattern and frequency queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read the corpus from a file
    #[arg(short, long, global = true, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Fetch the corpus from a URL
    #[arg(short, long, global = true)]
    url: Option<String>,

    /// Configuration file (defaults to the app data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Hide the progress spinner
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Positions of words equal to WORD
    Search { word: String },
    /// Positions of words starting with PREFIX
    Prefix { prefix: String },
    /// Positions of words ending with SUFFIX
    Suffix { suffix: String },
    /// Whether WORD occurs in the corpus
    Contains { word: String },
    /// Positions of words matching a regular expression
    Match {
        /// One or more patterns; each is compiled once
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Distinct words with their frequencies
    Terms {
        /// Only terms occurring at least this many times
        #[arg(short, long)]
        min: Option<usize>,
        /// Show at most this many terms
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show index statistics
    Stats,
    /// List every distinct word with its positions
    Traverse {
        /// Walk the reverse trie instead
        #[arg(long)]
        reverse: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write it to the app data directory
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    if let Commands::Config { save } = cli.command {
        if save {
            let path = config.save()?;
            println!("Saved configuration to: {}", path.display());
        }
        return output::print_json(&config).context("Failed to write output");
    }

    let spinner = Spinner::start("Loading corpus...", cli.quiet || cli.json);
    let text = load_text(&cli)?;
    spinner.set_message("Building index...");
    let words = split_words(&text);
    drop(text);

    let mut index = Streeng::with_config(words, &config);
    spinner.finish(&format!(
        "Indexed {} words ({} nodes)",
        index.len(),
        index.node_count()
    ));

    let color = !cli.no_color;
    match cli.command {
        Commands::Search { word } => {
            let positions = index.search(&word).to_vec();
            report(&index, "search", &word, &positions, cli.json, color)?;
        }
        Commands::Prefix { prefix } => {
            let positions = index.start_with(&prefix);
            report(&index, "prefix", &prefix, &positions, cli.json, color)?;
        }
        Commands::Suffix { suffix } => {
            if !index.has_reverse() {
                index.build_reverse();
            }
            let positions = index.end_with(&suffix);
            report(&index, "suffix", &suffix, &positions, cli.json, color)?;
        }
        Commands::Contains { word } => {
            let found = index.contains(&word);
            if cli.json {
                output::print_json(&serde_json::json!({ "word": word, "contains": found }))?;
            } else {
                println!("{}: {}", word, found);
            }
        }
        Commands::Match { patterns } => {
            let cache = PatternCache::new(config.pattern_cache_size);
            for pattern in &patterns {
                let positions = cache
                    .matches(&index, pattern)
                    .with_context(|| format!("Failed to run pattern {:?}", pattern))?;
                report(&index, "match", pattern, &positions, cli.json, color)?;
            }
        }
        Commands::Terms { min, limit } => {
            index.terms();
            let min = min.unwrap_or(config.min_frequency);
            let mut ranked = index.ranked_terms(min).unwrap_or_default();
            if let Some(limit) = limit {
                ranked.truncate(limit);
            }
            if cli.json {
                output::print_json(&ranked)?;
            } else {
                output::print_terms(&ranked, color)?;
            }
        }
        Commands::Stats => {
            index.terms();
            if !index.has_reverse() {
                index.build_reverse();
            }
            let stats = index.stats();
            if cli.json {
                output::print_json(&stats)?;
            } else {
                show_stats(&stats);
            }
        }
        Commands::Traverse { reverse } => {
            if reverse && !index.has_reverse() {
                index.build_reverse();
            }
            let mut rows = Vec::new();
            let mut collect = |node: &streeng::Node| {
                if let Some(first) = node.representative() {
                    rows.push((index.word(first).to_string(), node.positions().to_vec()));
                }
            };
            if reverse {
                index.traverse_reverse(&mut collect);
            } else {
                index.traverse(&mut collect);
            }
            if cli.json {
                output::print_json(&rows)?;
            } else {
                for (word, positions) in rows {
                    println!("{}\t{:?}", word, positions);
                }
            }
        }
        // Handled before the corpus is loaded
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "streeng=debug" } else { "streeng=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<IndexConfig> {
    match path {
        Some(path) => IndexConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => IndexConfig::load().context("Failed to load config"),
    }
}

fn load_text(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.file {
        return string_from_file(path).context("Failed to read corpus file");
    }
    if let Some(url) = &cli.url {
        return fetch_url(url);
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read corpus from stdin")?;
    Ok(text)
}

#[cfg(feature = "remote")]
fn fetch_url(url: &str) -> Result<String> {
    streeng::utils::string_from_url(url).with_context(|| format!("Failed to fetch {}", url))
}

#[cfg(not(feature = "remote"))]
fn fetch_url(url: &str) -> Result<String> {
    anyhow::bail!("Cannot fetch {}: built without the `remote` feature", url)
}

fn report(
    index: &Streeng,
    kind: &str,
    query: &str,
    positions: &[usize],
    json: bool,
    color: bool,
) -> Result<()> {
    let matches = output::position_matches(index, positions);
    if json {
        output::print_json(&QueryOutput {
            query,
            kind,
            count: matches.len(),
            matches,
        })?;
    } else {
        output::print_summary(&format!("{} {:?}", kind, query), &matches, color)?;
    }
    Ok(())
}
