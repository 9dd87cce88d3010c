//! Graphex CLI — offline companion for the explorer service layer.
//!
//! Usage:
//!   graphex translate search --field name --value alice [--limit 50]
//!   graphex translate neighbors <id>
//!   graphex translate create-vertex <label> [-p key=value]...
//!   graphex translate create-edge <source> <target> <label>
//!   graphex translate info
//!   graphex normalize [--format v1|v3] [file]
//!   graphex info [--format v1|v3] [file]
//!
//! `normalize` and `info` read a GraphSON response payload from a file (or
//! stdin when omitted) and print the normalized result as JSON.

use clap::{Parser, Subcommand, ValueEnum};
use graphex::{aggregate_info, arrange, ElementId, GraphsonFormat, QueryTranslator};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "graphex",
    version,
    about = "Gremlin query translation and GraphSON normalization"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build Gremlin query strings from structured intents
    Translate {
        #[command(subcommand)]
        intent: Intent,
    },
    /// Normalize a GraphSON response payload into the uniform graph model
    Normalize {
        /// Wire format of the payload
        #[arg(long, value_enum, default_value = "v3")]
        format: FormatArg,
        /// Payload file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Aggregate a graph-info response payload into a snapshot
    Info {
        /// Wire format of the payload
        #[arg(long, value_enum, default_value = "v3")]
        format: FormatArg,
        /// Payload file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum Intent {
    /// Field/value vertex search plus the edges among the matched set
    Search {
        /// Property field to match on
        #[arg(long)]
        field: String,
        /// Value to match (empty fetches up to the node limit)
        #[arg(long, default_value = "")]
        value: String,
        /// Per-request node-count limit
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// Expand one vertex to its any-direction neighborhood
    Neighbors {
        /// Seed vertex identifier
        id: String,
    },
    /// Vertex-creation statement
    CreateVertex {
        /// Vertex label
        label: String,
        /// Properties as key=value pairs, in order
        #[arg(short = 'p', long = "property", value_parser = parse_key_value)]
        properties: Vec<(String, String)>,
    },
    /// Edge-creation statement between two existing vertices
    CreateEdge {
        /// Source vertex identifier
        source: String,
        /// Target vertex identifier
        target: String,
        /// Edge label
        label: String,
    },
    /// Database-wide grouped-count query
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    V1,
    V3,
}

impl From<FormatArg> for GraphsonFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::V1 => GraphsonFormat::V1,
            FormatArg::V3 => GraphsonFormat::V3,
        }
    }
}

fn parse_key_value(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected key=value, got '{input}'")),
    }
}

fn read_payload(file: Option<&PathBuf>) -> Result<serde_json::Value, String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            buf
        }
    };
    serde_json::from_str(&text).map_err(|e| format!("invalid JSON payload: {}", e))
}

fn cmd_translate(intent: Intent) -> i32 {
    let translator = QueryTranslator::new();
    match intent {
        Intent::Search { field, value, limit } => {
            let bundle = translator.with_node_limit(limit).search(&field, &value);
            println!("{}", bundle.combined);
        }
        Intent::Neighbors { id } => {
            let bundle = translator.neighborhood(&ElementId::parse(&id));
            println!("{}", bundle.combined);
        }
        Intent::CreateVertex { label, properties } => {
            println!("{}", translator.create_vertex(&label, &properties));
        }
        Intent::CreateEdge { source, target, label } => {
            println!(
                "{}",
                translator.create_edge(
                    &ElementId::parse(&source),
                    &ElementId::parse(&target),
                    &label
                )
            );
        }
        Intent::Info => {
            println!("{}", translator.graph_info());
        }
    }
    0
}

fn cmd_normalize(format: FormatArg, file: Option<PathBuf>) -> i32 {
    let payload = match read_payload(file.as_ref()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match arrange(payload, format.into()) {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_info(format: FormatArg, file: Option<PathBuf>) -> i32 {
    let payload = match read_payload(file.as_ref()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match aggregate_info(payload, format.into()) {
        Ok(info) => match serde_json::to_string_pretty(&info) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Translate { intent } => cmd_translate(intent),
        Commands::Normalize { format, file } => cmd_normalize(format, file),
        Commands::Info { format, file } => cmd_info(format, file),
    };
    std::process::exit(code);
}
