//! Benchmark results on disk.
//!
//! # Components
//!
//! - `game_record`: outcome of one game
//! - `results_writer`: JSON-lines files, one per benchmark setting
//! - `csv_writer`: average-profit summary CSV

pub mod csv_writer;
pub mod game_record;
pub mod results_writer;

pub use csv_writer::{average_profit, summarize_results, write_summary_csv, ProfitRow, SettingKey, SummaryFilter};
pub use game_record::GameResult;
pub use results_writer::{read_results, ResultsWriter};
