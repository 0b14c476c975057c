use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_ROOT;

/// Scaffolds the Node.js tutorial content tree.
///
/// Without a subcommand, generates the built-in outline under the default root.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create part/chapter/lesson directories; existing lessons are kept.
    Generate(GenerateArgs),
    /// Print the outline as YAML.
    Outline(OutlineArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Root directory of the tutorial tree.
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: String,

    /// YAML outline to use instead of the built-in one.
    #[arg(long)]
    pub outline: Option<String>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_owned(),
            outline: None,
        }
    }
}

#[derive(Debug, Args)]
pub struct OutlineArgs {
    /// YAML outline to validate and print instead of the built-in one.
    #[arg(long)]
    pub outline: Option<String>,
}
