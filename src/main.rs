use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;
use tracing_subscriber::EnvFilter;
use wordgrid::dawg::DawgReader;
use wordgrid::grid::{self, Grid};
use wordgrid::output::{self, CheckReport, LookupReport, TraceReport};
use wordgrid::solver::{self, Solution};
use wordgrid::utils::{AppConfig, DICTIONARY_ENV};

#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(about = "Dictionary lookups and word tracing for word-grid games")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary artifact (defaults to $WORDGRID_DICT, then the config file)
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// When to color output
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether letters form a prefix or a word, and what can follow
    Lookup {
        /// Letter sequence to look up
        letters: String,
    },
    /// List the letters that can follow a prefix
    Children {
        /// Prefix (empty for first letters)
        #[arg(default_value = "")]
        prefix: String,
    },
    /// Test whether one letter can follow a prefix
    HasChild {
        /// Prefix (may be empty)
        prefix: String,
        /// Letter to test
        letter: char,
    },
    /// Test whether a word can be traced on a board
    Trace {
        /// 16 or 25 tiles, row-major
        grid: String,
        /// Word to trace
        word: String,
        /// List every path that spells the word
        #[arg(long)]
        paths: bool,
    },
    /// Check a submitted word: length, dictionary and board
    Check {
        /// 16 or 25 tiles, row-major
        grid: String,
        /// Submitted word
        word: String,
    },
    /// Find every dictionary word on a board
    Solve {
        /// 16 or 25 tiles, row-major
        grid: String,
        /// Shortest word to report (defaults to side - 1)
        #[arg(short, long)]
        min_length: Option<usize>,
    },
    /// Shake a random board
    Generate {
        /// Board side, 4 or 5
        #[arg(short, long, default_value_t = 4)]
        size: usize,
        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show dictionary statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = AppConfig::load()?;
    let color = match cli.color {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if config.color == Some(false) => ColorChoice::Never,
        ColorMode::Auto => ColorChoice::Auto,
    };
    let dict = cli.dict.as_deref();

    match cli.command {
        Commands::Lookup { letters } => {
            let reader = open_dictionary(dict, &config)?;
            let report = LookupReport::new(&reader, &letters.to_lowercase());
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_lookup(&report, color)?;
            }
            reader.unload();
        }
        Commands::Children { prefix } => {
            let reader = open_dictionary(dict, &config)?;
            let children = reader.children(&prefix.to_lowercase());
            if cli.json {
                output::print_json(&children)?;
            } else {
                output::print_children(&children, color)?;
            }
            reader.unload();
        }
        Commands::HasChild { prefix, letter } => {
            let reader = open_dictionary(dict, &config)?;
            let found = reader.has_child(&prefix.to_lowercase(), letter.to_ascii_lowercase());
            if cli.json {
                output::print_json(&found)?;
            } else {
                println!("{}", found);
            }
            reader.unload();
        }
        Commands::Trace { grid, word, paths } => {
            let board = parse_grid(&grid)?;
            let word = word.to_lowercase();
            let report = TraceReport {
                traceable: board.can_trace(&word),
                paths: paths.then(|| board.find_paths(&word)),
                grid: grid.to_lowercase(),
                word,
            };
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_trace(&report, color)?;
            }
        }
        Commands::Check { grid, word } => {
            let board = parse_grid(&grid)?;
            let reader = open_dictionary(dict, &config)?;
            let word = word.to_lowercase();
            let report = match solver::check_word(&reader, &board, &word) {
                Ok(score) => CheckReport {
                    word,
                    accepted: true,
                    score,
                    reason: None,
                },
                Err(rejection) => CheckReport {
                    word,
                    accepted: false,
                    score: 0,
                    reason: Some(rejection.to_string()),
                },
            };
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_check(&report, color)?;
            }
            reader.unload();
        }
        Commands::Solve { grid, min_length } => {
            let board = parse_grid(&grid)?;
            let reader = open_dictionary(dict, &config)?;
            let min_length = min_length.unwrap_or_else(|| board.min_word_length());
            let solution = Solution::new(solver::solve(&reader, &board, min_length));
            if cli.json {
                output::print_json(&solution)?;
            } else {
                output::print_board(&board, color)?;
                println!();
                output::print_solution(&solution, color)?;
            }
            reader.unload();
        }
        Commands::Generate { size, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let board = grid::generate(size, &mut rng)?;
            if cli.json {
                output::print_json(&serde_json::json!({
                    "grid": String::from_utf8_lossy(board.tiles()),
                    "rows": board.rows(),
                }))?;
            } else {
                println!("{}", String::from_utf8_lossy(board.tiles()));
                output::print_board(&board, color)?;
            }
        }
        Commands::Stats => {
            let reader = open_dictionary(dict, &config)?;
            let stats = reader.stats();
            if cli.json {
                output::print_json(&stats)?;
            } else {
                output::print_stats(&stats, color)?;
            }
            reader.unload();
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("wordgrid=debug"))?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("wordgrid=warn"))?
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn open_dictionary(explicit: Option<&Path>, config: &AppConfig) -> Result<DawgReader> {
    let path = config.resolve_dictionary(explicit)?;
    DawgReader::open(&path).with_context(|| {
        format!(
            "No usable dictionary (pass --dict or set {})",
            DICTIONARY_ENV
        )
    })
}

fn parse_grid(tiles: &str) -> Result<Grid> {
    Grid::parse(&tiles.to_lowercase()).context("Invalid grid")
}
