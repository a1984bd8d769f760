// SPDX-License-Identifier: MIT OR Apache-2.0
//! trawl CLI binary - deep key search and rewriting for JSON documents

use anyhow::{Context, bail};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use trawl_cli::core::{Key, Limits, Node, Scope};
use trawl_cli::ops::{
    RemoveOptions, UpdateOptions, compact_with, contains, count, find, find_flattened, remove,
    update,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "trawl")]
#[command(version, about, long_about = None)]
struct Args {
    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact_output: bool,

    /// Read the input as YAML
    #[cfg(feature = "yaml")]
    #[arg(long, global = true)]
    yaml: bool,

    /// Deepest nesting a rewrite will accept
    #[arg(long, global = true, default_value_t = trawl_cli::core::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

/// Key and input shared by the key-based subcommands
#[derive(ClapArgs)]
struct Target {
    /// Key to look for
    key: String,

    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

/// Ancestor keys restricting an operation
#[derive(ClapArgs)]
struct Parents {
    /// Only consider matches beneath this key (repeatable)
    #[arg(short = 'p', long = "parent", value_name = "KEY")]
    parent: Vec<String>,
}

impl Parents {
    fn scope(&self) -> Option<Scope> {
        if self.parent.is_empty() {
            None
        } else {
            Some(self.parent.iter().cloned().map(Key::Str).collect())
        }
    }
}

/// Subcommands for trawl CLI
#[derive(Subcommand)]
enum Commands {
    /// Check whether a key occurs anywhere in the document
    Contains {
        #[command(flatten)]
        target: Target,
    },
    /// Count the occurrences of a key
    Count {
        #[command(flatten)]
        target: Target,
    },
    /// Print every value bound to a key
    Find {
        #[command(flatten)]
        target: Target,
        #[command(flatten)]
        parents: Parents,
        /// Splice array values into the result
        #[arg(long)]
        flatten: bool,
    },
    /// Replace the value bound to a key
    Update {
        #[command(flatten)]
        target: Target,
        /// New value, as JSON
        #[arg(long, value_name = "JSON")]
        value: String,
        #[command(flatten)]
        parents: Parents,
        /// Replace every occurrence instead of failing when the key repeats
        #[arg(long)]
        allow_duplicates: bool,
        /// Add the key at the top level instead of failing when it is absent
        #[arg(long)]
        insert_missing: bool,
    },
    /// Remove a key
    Remove {
        #[command(flatten)]
        target: Target,
        #[command(flatten)]
        parents: Parents,
        /// Remove every occurrence instead of failing when the key repeats
        #[arg(long)]
        allow_duplicates: bool,
    },
    /// Remove null and empty values
    Compact {
        /// Input file (reads from stdin if not provided)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let result = run(&args).and_then(|output| write_output(args.output.as_ref(), &output));
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trawl=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(args: &Args) -> anyhow::Result<String> {
    let limits = Limits::with_max_depth(args.max_depth);

    let result = match &args.command {
        Commands::Contains { target } => {
            let tree = read_tree(args, target.input.as_ref())?;
            contains(&tree, &Key::Str(target.key.clone())).map_or(Node::null(), Node::from)
        }
        Commands::Count { target } => {
            let tree = read_tree(args, target.input.as_ref())?;
            let n = count(&tree, &Key::Str(target.key.clone()));
            Node::from(i64::try_from(n).context("count out of range")?)
        }
        Commands::Find {
            target,
            parents,
            flatten,
        } => {
            let tree = read_tree(args, target.input.as_ref())?;
            let key = Key::Str(target.key.clone());
            let scope = parents.scope();
            let found = if *flatten {
                find_flattened(&tree, &key, scope.as_ref())
            } else {
                find(&tree, &key, scope.as_ref())
            };
            found.map_or(Node::null(), Node::Sequence)
        }
        Commands::Update {
            target,
            value,
            parents,
            allow_duplicates,
            insert_missing,
        } => {
            let tree = read_tree(args, target.input.as_ref())?;
            let value: serde_json::Value =
                serde_json::from_str(value).context("value is not valid JSON")?;
            let options = UpdateOptions {
                error_on_missing: !insert_missing,
                error_on_uniqueness: !allow_duplicates,
                parent: parents.scope(),
                limits,
            };
            update(&tree, &Key::Str(target.key.clone()), Node::from(value), &options)?
        }
        Commands::Remove {
            target,
            parents,
            allow_duplicates,
        } => {
            let tree = read_tree(args, target.input.as_ref())?;
            let options = RemoveOptions {
                error_on_uniqueness: !allow_duplicates,
                parent: parents.scope(),
                limits,
            };
            remove(&tree, &Key::Str(target.key.clone()), &options)?
        }
        Commands::Compact { input } => {
            let tree = read_tree(args, input.as_ref())?;
            compact_with(&tree, &limits)?
        }
    };

    render(&result, args.compact_output)
}

fn render(node: &Node, compact: bool) -> anyhow::Result<String> {
    let value = node.to_json()?;
    let mut output = if compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    output.push('\n');
    Ok(output)
}

fn read_tree(args: &Args, path: Option<&PathBuf>) -> anyhow::Result<Node> {
    let input = read_input(path)?;
    tracing::debug!(bytes = input.len(), "read input");
    parse_tree(args, &input)
}

#[cfg(feature = "yaml")]
fn parse_tree(args: &Args, input: &str) -> anyhow::Result<Node> {
    if args.yaml {
        let value: serde_yaml::Value = serde_yaml::from_str(input).context("invalid YAML")?;
        return Ok(Node::from_yaml(value)?);
    }
    parse_json(input)
}

#[cfg(not(feature = "yaml"))]
fn parse_tree(_args: &Args, input: &str) -> anyhow::Result<Node> {
    parse_json(input)
}

fn parse_json(input: &str) -> anyhow::Result<Node> {
    if input.trim().is_empty() {
        bail!("no input");
    }
    let value: serde_json::Value = serde_json::from_str(input).context("invalid JSON")?;
    Ok(Node::from(value))
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    if let Some(p) = path {
        fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
    } else {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Ok(input)
    }
}

fn write_output(path: Option<&PathBuf>, output: &str) -> anyhow::Result<()> {
    if let Some(p) = path {
        fs::write(p, output).with_context(|| format!("writing {}", p.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(output.as_bytes())?;
    }
    Ok(())
}
