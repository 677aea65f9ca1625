//! Command-line arguments and execution

use crate::error::{CliError, CliResult};
use crate::input::FileReader;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::Context;
use clap::Parser;
use concordia_core::{concordance_from_text, Concordance, SegmentRules, SegmentTokenizer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Build a word concordance from a text file
#[derive(Debug, Parser)]
#[command(name = "concordia", version, about)]
pub struct ConcordiaArgs {
    /// Input text file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with extra tokenizer abbreviations
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Header line plus one `word: count [indices]` line per entry
    Text,
    /// JSON array of entries with counts and sentence indices
    Json,
}

impl ConcordiaArgs {
    /// Execute the command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Building concordance from {}", self.input.display());
        log::debug!("Arguments: {:?}", self);

        if !self.input.is_file() {
            return Err(CliError::FileNotFound(self.input.display().to_string()).into());
        }

        let tokenizer = match &self.rules {
            Some(path) => SegmentTokenizer::with_rules(SegmentRules::from_toml_path(path)?),
            None => SegmentTokenizer::new(),
        };

        let text = FileReader::read_text(&self.input)?;
        let concordance = concordance_from_text(&tokenizer, &text)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;

        log::info!("Concordance holds {} distinct words", concordance.len());

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                self.render(&concordance, BufWriter::new(file))
            }
            None => self.render(&concordance, io::stdout()),
        }
    }

    /// Stream the sorted entries through the selected formatter
    fn render<W: Write + Send + Sync + 'static>(
        &self,
        concordance: &Concordance,
        writer: W,
    ) -> CliResult<()> {
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        formatter.begin()?;
        for entry in concordance {
            formatter.write_entry(entry)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
