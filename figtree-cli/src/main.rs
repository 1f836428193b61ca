//! Command-line interface for figtree.
//! Fetches a Figma node tree (or loads one from disk), analyzes it, and
//! writes the full analysis, per-frame exports, and the smart prompt pack.
//!
//! Usage:
//!   figtree [--config <file>] [--out <dir>]       - Fetch and analyze the configured node
//!   figtree --input <node.json> [--out <dir>]     - Analyze a local node tree
//!   figtree --no-prompts ...                      - Skip the prompt pack

mod output;

use clap::{Arg, ArgAction, Command};
use figtree_analysis::{analyze_document, analyze_node, AnalysisResult, Element};
use figtree_client::FigmaClient;
use figtree_config::{FigtreeConfig, Loader};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("figtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Analyzes a Figma design tree into tokens, frames, and prompts")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Analyze a node tree from a local JSON file instead of the API"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Additional configuration file (TOML), layered over the defaults"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .help("Output directory (overrides the configured one)"),
        )
        .arg(
            Arg::new("no-prompts")
                .long("no-prompts")
                .help("Skip generating the smart prompt pack")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let result = run(
        matches.get_one::<String>("input").map(String::as_str),
        matches.get_one::<String>("config").map(String::as_str),
        matches.get_one::<String>("out").map(String::as_str),
        matches.get_flag("no-prompts"),
    );
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(
    input: Option<&str>,
    config_file: Option<&str>,
    out: Option<&str>,
    no_prompts: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_file, out)?;
    let out_dir = Path::new(&config.output.dir);

    let analysis = match input {
        Some(path) => analyze_local(path)?,
        None => analyze_remote(&config)?,
    };

    output::write_analysis(out_dir, &analysis)?;

    let Some(root) = analysis.target_node.as_ref().and_then(Element::as_node) else {
        warn!("no target node in the analysis, skipping frames and prompts");
        return Ok(());
    };

    let frames = figtree_analysis::partition(root, &analysis.design_tokens);
    output::write_frames(out_dir, &frames)?;

    if no_prompts {
        info!("prompt pack skipped");
    } else {
        let docs = figtree_prompts::generate(&analysis, &frames);
        output::write_prompts(out_dir, &docs)?;
    }

    info!(dir = %out_dir.display(), "done");
    Ok(())
}

fn load_config(
    config_file: Option<&str>,
    out: Option<&str>,
) -> Result<FigtreeConfig, Box<dyn std::error::Error>> {
    let mut loader = match config_file {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("figtree.toml"),
    };
    loader = loader.with_env();
    if let Some(dir) = out {
        loader = loader.set_override("output.dir", dir)?;
    }
    Ok(loader.build()?)
}

fn analyze_local(path: &str) -> Result<AnalysisResult, Box<dyn std::error::Error>> {
    info!(path, "loading node tree from disk");
    let body = std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read {}: {}", path, err))?;
    let root: figtree_analysis::RawNode = serde_json::from_str(&body)
        .map_err(|err| format!("cannot parse {}: {}", path, err))?;
    Ok(analyze_node(&root))
}

fn analyze_remote(config: &FigtreeConfig) -> Result<AnalysisResult, Box<dyn std::error::Error>> {
    let figma = &config.figma;
    if figma.access_token.is_empty() || figma.file_key.is_empty() || figma.node_id.is_empty() {
        return Err(
            "figma.access_token, figma.file_key, and figma.node_id must be configured \
             (or pass --input to analyze a local file)"
                .into(),
        );
    }

    let client = FigmaClient::new(&figma.access_token)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let data = runtime.block_on(client.full_structure(&figma.file_key, &figma.node_id))?;
    Ok(analyze_document(&data))
}
