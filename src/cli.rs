//! CLI argument definitions.
//!
//! Connection flags follow the classic `-u -p -h -P -D` layout, so `-h` is the
//! host and help is only available as `--help`. Connection flags are optional
//! here; their defaults are applied when settings are resolved so that the
//! config file can sit in between.
//!
//! The server is PostgreSQL, so the defaults are `postgres@localhost:5432`
//! with database `postgres` and an empty password, not the MySQL-style
//! `root@localhost:3306/test`.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_help_flag = true)]
pub struct Args {
    /// Database user [default: postgres]
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Password [default: empty]
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Server host [default: localhost]
    #[arg(short = 'h', long)]
    pub host: Option<String>,

    /// Server port [default: 5432]
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Database name [default: postgres]
    #[arg(short = 'D', long)]
    pub database: Option<String>,

    /// Execute one statement, print its result and exit
    #[arg(short = 'e', long, value_name = "SQL")]
    pub execute: Option<String>,

    /// Output format for statements without a directive
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Simple)]
    pub format: OutputFormat,

    /// Path to a JSON configuration file [default: ./.sqlsh.json if present]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn", value_name = "FILTER")]
    pub log_level: String,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
