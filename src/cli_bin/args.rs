//! Command-line argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use mds::server::{DEFAULT_DESCRIPTION, DEFAULT_NAME};
use mds::ServerConfig;
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "mds",
    version,
    about = "Serve a directory of markdown documents and their front matter",
    long_about = "mds indexes the markdown files under a directory, decodes their YAML (---) \
                  or TOML (+++) front matter, and exposes them as a listing tool, a reading \
                  tool and a set of file:// resources."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub server: ServerOptions,

    /// Output format
    #[arg(long, value_enum, default_value = "json", global = true)]
    pub format: OutputFormat,

    /// Pretty print output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all markdown files with their front matter
    List,
    /// Read a markdown file by its path relative to the root
    Read(ReadArgs),
    /// Show the resources declared at startup
    Resources,
    /// Read a resource by its file:// address
    Resource(ResourceArgs),
    /// Show the tools the server offers
    Tools,
}

/// Options describing the served directory
#[derive(Args, Debug, Clone)]
pub struct ServerOptions {
    /// Path to the directory to serve
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub path: PathBuf,

    /// Name of the server
    #[arg(long, default_value = DEFAULT_NAME, global = true)]
    pub name: String,

    /// Description of the server
    #[arg(long, default_value = DEFAULT_DESCRIPTION, global = true)]
    pub description: String,

    /// Comma-separated list of front matter keys to exclude
    #[arg(long, value_name = "KEYS", value_delimiter = ',', global = true)]
    pub exclude_frontmatter: Vec<String>,
}

impl ServerOptions {
    pub fn to_config(&self) -> ServerConfig {
        ServerConfig::new(&self.name, &self.description, &self.path)
            .with_exclude_frontmatter(self.exclude_frontmatter.iter().cloned())
    }
}

/// Arguments for the read command
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Path of the file, relative to the served directory
    #[arg(id = "read_path", value_name = "PATH")]
    pub path: String,
}

/// Arguments for the resource command
#[derive(Args, Debug)]
pub struct ResourceArgs {
    /// Resource address, e.g. file://guide/intro.md
    pub uri: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}
