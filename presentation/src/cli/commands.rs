//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for interview-coach
#[derive(Parser, Debug)]
#[command(name = "interview-coach")]
#[command(author, version, about = "AI mock interviews with per-answer feedback and a PDF report")]
#[command(long_about = r#"
Interview Coach runs a mock interview in your terminal.

Pick a domain, answer each question, and a Gemini model evaluates every
answer with a summary, strengths, areas of improvement, a score out of 10
and an improved version. After the last question, /report writes a PDF
with all answers and feedback.

The API key is read from GOOGLE_API_KEY (a .env file is honoured).

Configuration files are loaded from (in priority order):
1. COACH_* environment variables  (e.g. COACH_GEMINI__MODEL)
2. --config <path>                Explicit config file
3. ./interview-coach.toml         Project-level config
4. ~/.config/interview-coach/config.toml   Global config

Example:
  interview-coach --domain "Data Science" --name "Ada Lovelace"
  interview-coach -d marketing -m gemini-2.0-flash -o reports/
"#)]
pub struct Cli {
    /// Interview domain to start with (see --list-domains)
    #[arg(short, long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Candidate name printed on the report
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Model that evaluates the answers
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Directory the report is written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Image drawn on the report cover (skipped when missing)
    #[arg(long, value_name = "PATH")]
    pub logo: Option<PathBuf>,

    /// Print the available interview domains and exit
    #[arg(long)]
    pub list_domains: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostic logs to this directory instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
