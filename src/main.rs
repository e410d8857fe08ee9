//! bimerkle CLI - demonstrates building and walking a binary merkle tree
//!
//! Builds two leaves, merges them under two roots in opposite orders and
//! walks the result level by level.

use anyhow::Context;
use bimerkle::{Algorithm, MerkleNode};
use clap::{Parser, Subcommand};

/// First demo block, used when `--left` is not given
const DEFAULT_LEFT_BLOCK: [u8; 8] = [1, 10, 12, 20, 90, 45, 23, 67];

/// Second demo block, used when `--right` is not given
const DEFAULT_RIGHT_BLOCK: [u8; 8] = [10, 45, 22, 26, 78, 33, 67, 22];

#[derive(Parser)]
#[command(name = "bimerkle")]
#[command(about = "Build and inspect a binary merkle tree")]
#[command(version)]
struct Cli {
    /// Digest algorithm: sha256, sha1, sha512 or blake3
    #[arg(short, long, env = "BIMERKLE_ALGORITHM", default_value = "sha256")]
    algorithm: Algorithm,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge two leaves in both orders and walk the second tree
    Demo {
        /// Left data block as hex
        #[arg(long)]
        left: Option<String>,
        /// Right data block as hex
        #[arg(long)]
        right: Option<String>,
    },

    /// Hash a single data block into a leaf
    Digest {
        /// The data block as hex
        block: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("using {} digests", cli.algorithm);

    match cli.command {
        Commands::Demo { left, right } => {
            let block1 = parse_block(left.as_deref(), &DEFAULT_LEFT_BLOCK)?;
            let block2 = parse_block(right.as_deref(), &DEFAULT_RIGHT_BLOCK)?;

            let l1 = MerkleNode::leaf(Some(block1.as_slice()), cli.algorithm);
            let l2 = MerkleNode::leaf(Some(block2.as_slice()), cli.algorithm);
            let leaf1 = l1.hash_code().cloned();
            let leaf2 = l2.hash_code().cloned();

            let mut m1 = MerkleNode::new(cli.algorithm);
            m1.merge(Some(l1.clone()), Some(l2.clone()));

            let mut m2 = MerkleNode::new(cli.algorithm);
            m2.merge(Some(l2), Some(l1));

            let nodes: Vec<_> = m2
                .level_order()
                .map(|(level, node)| {
                    serde_json::json!({
                        "level": level,
                        "hash": node.hash_code(),
                        "is_leaf": node.is_leaf()
                    })
                })
                .collect();

            let mut lines = vec![
                format!("Leaf 1 digest: {}", display(leaf1.as_ref())),
                format!("Leaf 2 digest: {}", display(leaf2.as_ref())),
                format!("Digest of both leaves: {}", display(m1.hash_code())),
                format!("Digest of the swapped tree: {}", display(m2.hash_code())),
            ];
            m2.visit(|node| {
                lines.push(format!(
                    "[node hash={}] is_leaf={}",
                    display(node.hash_code()),
                    node.is_leaf()
                ));
            });

            output(
                &cli.format,
                &serde_json::json!({
                    "algorithm": cli.algorithm,
                    "leaves": [leaf1, leaf2],
                    "root": m1.hash_code(),
                    "swapped_root": m2.hash_code(),
                    "height": m2.height(),
                    "nodes": nodes
                }),
                &lines,
            )?;
        }

        Commands::Digest { block } => {
            let data = parse_block(Some(&block), &[])?;
            let leaf = MerkleNode::leaf(Some(data.as_slice()), cli.algorithm);
            output(
                &cli.format,
                &serde_json::json!({
                    "algorithm": cli.algorithm,
                    "bytes": data.len(),
                    "hash": leaf.hash_code()
                }),
                &[display(leaf.hash_code())],
            )?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn parse_block(hex_block: Option<&str>, default: &[u8]) -> anyhow::Result<Vec<u8>> {
    match hex_block {
        Some(s) => hex::decode(s.trim()).with_context(|| format!("invalid hex block: {s:?}")),
        None => Ok(default.to_vec()),
    }
}

fn display(hash: Option<&bimerkle::Hash>) -> String {
    hash.map(|h| h.to_hex()).unwrap_or_else(|| "<none>".to_string())
}

fn output(format: &OutputFormat, value: &serde_json::Value, text: &[String]) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value)?);
        }
        OutputFormat::Text => {
            for line in text {
                println!("{line}");
            }
        }
    }
    Ok(())
}
