//! csvpeek - Entry Point

use clap::Parser;
use csvpeek::config::{self, CliOverrides, ResolvedConfig};
use csvpeek::model::{AppError, Delimiter};
use csvpeek::source::FileSource;
use csvpeek::state::PagerSettings;
use csvpeek::view::{self, ColorConfig, Palette};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// csvpeek - browse arbitrarily large CSV files in the terminal
#[derive(Parser, Debug)]
#[command(name = "csvpeek")]
#[command(version)]
#[command(about = "TUI pager for arbitrarily large CSV files")]
pub struct Args {
    /// Path to the delimited file
    pub file: PathBuf,

    /// Field delimiter: one ASCII character, `\t` or `tab` [default: ,]
    #[arg(short, long)]
    pub delimiter: Option<Delimiter>,

    /// Data row to start at (0-based, header excluded)
    #[arg(short, long, default_value_t = 0)]
    pub line: usize,

    /// Rows buffered in memory per window [default: 10000]
    #[arg(long)]
    pub buffer_size: Option<usize>,

    /// Rows moved by PageUp/PageDown [default: 100]
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Values the command line overrides in the config precedence chain.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            delimiter: self.delimiter,
            buffer_size: self.buffer_size,
            page_size: self.page_size,
            no_color: self.no_color,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // the terminal guard inside `run` is dropped before anything is printed
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Fatal error");
            eprintln!("csvpeek: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config: ResolvedConfig = config::resolve(args.config.clone(), args.overrides())?;

    csvpeek::logging::init(&config.log_file_path)?;
    info!(config = ?config, file = %args.file.display(), "Configuration loaded and resolved");

    // fails before raw mode if the file is missing
    let source = FileSource::new(&args.file, config.delimiter)?;

    let settings = PagerSettings {
        buffer_size: config.buffer_size,
        page_size: config.page_size,
    };
    let palette = Palette::new(ColorConfig::from_env_and_args(config.no_color));

    view::run_with_source(source, args.line, settings, palette)
}
