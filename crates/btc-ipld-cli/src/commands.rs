use anyhow::Context;
use btc_ipld_codec::{block_link, BlockNode};
use btc_ipld_resolver::{resolve, tree, Field, Resolvable, ResolveResult};
use btc_ipld_types::Link;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::cli::*;
use crate::config::CliConfig;

/// Settings shared by every command.
pub struct Output {
    pub format: OutputFormat,
    pub config: CliConfig,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if let Some(base) = cli.link_base {
        config.link_base = base;
    }
    let out = Output {
        format: cli.format,
        config,
    };

    match cli.command {
        Command::Decode(args) => cmd_decode(&out, args),
        Command::Resolve(args) => cmd_resolve(&out, args),
        Command::Tree(args) => cmd_tree(&out, args),
        Command::Cid(args) => cmd_cid(&out, args),
    }
}

fn read_header(input: &HeaderInput) -> anyhow::Result<Vec<u8>> {
    let text = match (&input.header, &input.file) {
        (Some(hex), _) => hex.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("reading header file {}", path.display()))?,
        (None, None) => anyhow::bail!("no header given"),
    };
    let bytes = hex::decode(text.trim()).context("header is not valid hex")?;
    debug!(len = bytes.len(), "read header bytes");
    Ok(bytes)
}

fn cmd_decode(out: &Output, args: DecodeArgs) -> anyhow::Result<()> {
    let bytes = read_header(&args.input)?;
    let node = BlockNode::from_bytes(&bytes)?;
    match out.format {
        OutputFormat::Json => print_json(&node),
        OutputFormat::Text => {
            println!("{} {}", "Block header".bold(), node.summary().dimmed());
            for key in node.keys() {
                if let Some(field) = node.field(key) {
                    println!("  {:<11} {}", format!("{key}:").cyan(), render_field(out, field)?);
                }
            }
            if node.to_raw().is_genesis() {
                println!("  {}", "genesis block (null parent)".yellow());
            }
            Ok(())
        }
    }
}

fn cmd_resolve(out: &Output, args: ResolveArgs) -> anyhow::Result<()> {
    let bytes = read_header(&args.input)?;
    let node = BlockNode::from_bytes(&bytes)?;
    let path = args.path.as_deref().unwrap_or_default();
    let result = resolve(&node, path)?;
    match out.format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            match &result {
                ResolveResult::Node(node) => println!("{}", node.summary()),
                ResolveResult::Value(v) => println!("{}", v.to_string().bold()),
                ResolveResult::Link { link, .. } => println!("{}", render_link(out, link)?),
            }
            if result.needs_hop() {
                println!(
                    "{} {}",
                    "remainder:".yellow(),
                    result.remainder_path().bold()
                );
            }
            Ok(())
        }
    }
}

fn cmd_tree(out: &Output, args: TreeArgs) -> anyhow::Result<()> {
    let bytes = read_header(&args.input)?;
    let node = BlockNode::from_bytes(&bytes)?;
    let paths = tree(&node);
    match out.format {
        OutputFormat::Json => print_json(&paths),
        OutputFormat::Text => {
            for path in &paths {
                let is_link = node.field(path).is_some_and(|f| f.is_link());
                if is_link {
                    println!("{} {}", path, "(link)".blue());
                } else {
                    println!("{path}");
                }
            }
            Ok(())
        }
    }
}

fn cmd_cid(out: &Output, args: CidArgs) -> anyhow::Result<()> {
    let bytes = read_header(&args.input)?;
    let link = block_link(&bytes)?;
    match out.format {
        OutputFormat::Json => print_json(&link),
        OutputFormat::Text => {
            println!("{}", render_link(out, &link)?);
            Ok(())
        }
    }
}

fn render_field(out: &Output, field: Field<'_>) -> anyhow::Result<String> {
    match field {
        Field::Scalar(v) => Ok(v.to_string()),
        Field::Link(link) => render_link(out, link),
    }
}

fn render_link(out: &Output, link: &Link) -> anyhow::Result<String> {
    let cid = link.to_string_of_base(out.config.link_base.base())?;
    if out.config.display_hashes {
        Ok(format!("{} ({})", cid.green(), link.display_hex().dimmed()))
    } else {
        Ok(cid.green().to_string())
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinkBase;

    const GENESIS_HEX: &str = "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c";
    const FIXTURE_HEX: &str = "0200000087d6242b27d248a9e145fe764a0bcef03a403883a2e4c859020000000000000011a5b9a70acebedbbf71ef8ca341e8a98cf279c49eee8f92e10a2227743b6aeb9fa7ab526eba041900c44fbc";

    fn output(config: CliConfig) -> Output {
        colored::control::set_override(false);
        Output {
            format: OutputFormat::Text,
            config,
        }
    }

    fn fixture_node() -> BlockNode {
        BlockNode::from_bytes(&hex::decode(FIXTURE_HEX).unwrap()).unwrap()
    }

    #[test]
    fn read_header_trims_and_decodes() {
        let input = HeaderInput {
            header: Some(format!(" {FIXTURE_HEX}\n")),
            file: None,
        };
        assert_eq!(read_header(&input).unwrap().len(), 80);
    }

    #[test]
    fn read_header_rejects_bad_hex() {
        let input = HeaderInput {
            header: Some("xyz".into()),
            file: None,
        };
        assert!(read_header(&input).is_err());
    }

    #[test]
    fn read_header_reports_missing_file() {
        let input = HeaderInput {
            header: None,
            file: Some("/nonexistent/header.hex".into()),
        };
        let err = read_header(&input).unwrap_err();
        assert!(err.to_string().contains("reading header file"));
    }

    #[test]
    fn link_rendering_follows_config() {
        let node = fixture_node();
        let plain = render_link(
            &output(CliConfig {
                link_base: LinkBase::Base58btc,
                display_hashes: false,
            }),
            node.parent(),
        )
        .unwrap();
        assert_eq!(plain, "z4HFzdHLxSgJvCMJrsDtV7MgqiGALZdbbxgcTLVUUXQGBkGYjLb");

        let with_hash = render_link(
            &output(CliConfig {
                link_base: LinkBase::Base32,
                display_hashes: true,
            }),
            node.parent(),
        )
        .unwrap();
        assert!(with_hash.starts_with('b'));
        assert!(with_hash.ends_with("(000000000000000259c8e4a28338403af0ce0b4a76fe45e1a948d2272b24d687)"));
    }

    #[test]
    fn scalar_fields_render_plainly() {
        let node = fixture_node();
        let out = output(CliConfig::default());
        let rendered = render_field(&out, node.field("nonce").unwrap()).unwrap();
        assert_eq!(rendered, "3159344128");
    }

    #[test]
    fn decode_flags_genesis_from_assembled_node() {
        let genesis = BlockNode::from_bytes(&hex::decode(GENESIS_HEX).unwrap()).unwrap();
        assert!(genesis.to_raw().is_genesis());
        assert!(!fixture_node().to_raw().is_genesis());

        let out = output(CliConfig::default());
        let args = DecodeArgs {
            input: HeaderInput {
                header: Some(GENESIS_HEX.into()),
                file: None,
            },
        };
        cmd_decode(&out, args).unwrap();
    }
}
