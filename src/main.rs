use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use holdem_mcts::arena::{run_batch, run_game, BatchGrid, GameSettings, BOT_NAME};
use holdem_mcts::game::TableConfig;
use holdem_mcts::logging::setup_logging;
use holdem_mcts::mcts::MctsConfig;
use holdem_mcts::policy::PolicyKind;
use holdem_mcts::recording::{summarize_results, write_summary_csv, ResultsWriter, SummaryFilter};

#[derive(Parser, Debug)]
#[command(name = "holdem_mcts", about = "MCTS hold'em bot and its benchmark harness")]
struct Config {
    /// What to run
    #[arg(long, value_enum, default_value = "play")]
    mode: Mode,

    /// RNG seed for reproducible results
    #[arg(short = 'r', long, default_value_t = 2025)]
    seed: u64,

    /// Maximum number of rounds per game
    #[arg(long, default_value_t = 20)]
    rounds: u32,

    /// Number of opponents at the table
    #[arg(long, default_value_t = 2)]
    others: usize,

    /// Search cycles per candidate action
    #[arg(short = 's', long, default_value_t = 1000)]
    playouts: u32,

    /// Opponent policy
    #[arg(long, value_enum, default_value = "honest")]
    opponent: PolicyKind,

    /// Policy the bot assumes for every seat in its searches
    #[arg(long, value_enum, default_value = "random")]
    opponent_model: PolicyKind,

    #[arg(long, default_value_t = 200)]
    initial_stack: u32,

    #[arg(long, default_value_t = 5)]
    small_blind: u32,

    /// JSON file overriding the search settings (playouts and exploration)
    #[arg(long)]
    mcts_config: Option<PathBuf>,

    /// Games per setting in batch mode
    #[arg(short = 'g', long, default_value_t = 10)]
    games: usize,

    /// Opponent policies of the batch grid
    #[arg(long, value_enum, value_delimiter = ',', default_values = ["random", "honest"])]
    grid_opponents: Vec<PolicyKind>,

    /// Game lengths of the batch grid
    #[arg(long, value_delimiter = ',', default_values_t = [5, 10, 15, 20])]
    grid_rounds: Vec<u32>,

    /// Table sizes (opponent counts) of the batch grid
    #[arg(long, value_delimiter = ',', default_values_t = [1, 3, 5, 7])]
    grid_others: Vec<usize>,

    /// Search budgets of the batch grid
    #[arg(long, value_delimiter = ',', default_values_t = [100, 1000, 10000, 100000])]
    grid_playouts: Vec<u32>,

    /// Worker threads for batch mode (0 = one per core)
    #[arg(long, default_value_t = 0)]
    workers: usize,

    /// Directory of the per-setting JSON results
    #[arg(long, default_value = "gameplay_data")]
    results_dir: PathBuf,

    /// Do not store the result of a single game
    #[arg(long, default_value_t = false)]
    no_save: bool,

    /// Output of summarize mode
    #[arg(long, default_value = "gameplay_data/CSVs/average_profit.csv")]
    summary_csv: PathBuf,

    /// Only summarize games against this opponent
    #[arg(long, value_enum)]
    filter_opponent: Option<PolicyKind>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to rotated files in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
enum Mode {
    /// Play one game and print the final stacks
    Play,
    /// Play the whole benchmark grid in parallel
    Batch,
    /// Turn stored results into an average-profit CSV
    Summarize,
}

impl Config {
    fn table(&self) -> TableConfig {
        TableConfig {
            initial_stack: self.initial_stack,
            small_blind: self.small_blind,
            max_rounds: self.rounds,
        }
    }

    fn mcts(&self) -> Result<MctsConfig, Box<dyn Error>> {
        match &self.mcts_config {
            Some(path) => Ok(MctsConfig::load_from_file(path)?),
            None => Ok(MctsConfig::with_simulations(self.playouts)),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    log::info!("{} {}", holdem_mcts::NAME, holdem_mcts::VERSION);

    match config.mode {
        Mode::Play => play(&config),
        Mode::Batch => batch(&config),
        Mode::Summarize => summarize(&config),
    }
}

fn play(config: &Config) -> Result<(), Box<dyn Error>> {
    let settings = GameSettings {
        opponent: config.opponent,
        others: config.others,
        table: config.table(),
        mcts: config.mcts()?,
        opponent_model: config.opponent_model,
    };
    log::info!(
        "🃏 {} vs {} x {} | {} rounds | {}",
        BOT_NAME,
        settings.opponent,
        settings.others,
        settings.rounds(),
        settings.mcts.to_config_string()
    );

    let result = run_game(&settings, config.seed)?;
    for (name, stack) in &result.final_stacks {
        println!("{name:>10}: {stack}");
    }

    if !config.no_save {
        let path = ResultsWriter::new(&config.results_dir)?.append(&result)?;
        log::info!("result appended to {}", path.display());
    }
    Ok(())
}

fn batch(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.workers > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build_global()?;
    }

    let mcts = config.mcts()?;
    let grid = BatchGrid {
        opponents: config.grid_opponents.clone(),
        rounds: config.grid_rounds.clone(),
        others: config.grid_others.clone(),
        playouts: config.grid_playouts.clone(),
        games_per_setting: config.games,
        table: config.table(),
        exploration_constant: mcts.exploration_constant,
        opponent_model: config.opponent_model,
        base_seed: config.seed,
    };

    let writer = ResultsWriter::new(&config.results_dir)?;
    let results = run_batch(&grid, Some(&writer))?;

    let profits: Vec<i64> = results.iter().filter_map(|r| r.profit_of(BOT_NAME)).collect();
    let mean = profits.iter().sum::<i64>() as f64 / profits.len().max(1) as f64;
    log::info!("✅ {} games, mean profit {:.1}", results.len(), mean);
    Ok(())
}

fn summarize(config: &Config) -> Result<(), Box<dyn Error>> {
    let filter = SummaryFilter {
        opponent: config.filter_opponent.map(|kind| kind.player_label().to_string()),
        ..SummaryFilter::default()
    };
    let rows = summarize_results(&config.results_dir, BOT_NAME, &filter)?;
    if rows.is_empty() {
        log::warn!("no results found in {}", config.results_dir.display());
    }
    write_summary_csv(&config.summary_csv, &rows)?;
    log::info!("{} rows written to {}", rows.len(), config.summary_csv.display());
    Ok(())
}
