use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::LinkBase;

#[derive(Parser)]
#[command(
    name = "btc-ipld",
    about = "Decode Bitcoin block headers and resolve IPLD paths against them",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Multibase for printed links (overrides the config file)
    #[arg(long, global = true)]
    pub link_base: Option<LinkBase>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a header into its six fields
    Decode(DecodeArgs),
    /// Resolve a path, stopping at the first link
    Resolve(ResolveArgs),
    /// List every path in the header node
    Tree(TreeArgs),
    /// Print the header's own content identifier
    Cid(CidArgs),
}

/// Where to read the 80-byte header from.
#[derive(Args, Debug)]
pub struct HeaderInput {
    /// Header as 160 hex characters
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub header: Option<String>,

    /// File containing the header as hex text
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: HeaderInput,
}

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub input: HeaderInput,

    /// Path such as `/parent/timestamp`; omit for the whole node
    #[arg(short, long)]
    pub path: Option<String>,
}

#[derive(Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub input: HeaderInput,
}

#[derive(Args)]
pub struct CidArgs {
    #[command(flatten)]
    pub input: HeaderInput,
}
