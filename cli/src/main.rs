//! Risk Search CLI
//!
//! Text front end over the search core: run one algorithm, compare all of
//! them, or print the diagnostic graph.

use clap::{Parser, Subcommand};
use risk_search_core::{
    risk_graph, run_search, Algorithm, Graph, RiskLevel, RunHistory, SearchConfig, SearchResult,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "risk-search")]
#[command(about = "Informed search from symptoms to a risk assessment")]
struct Args {
    /// Search configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Beam width override
    #[arg(long, global = true)]
    beam_width: Option<usize>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one algorithm towards a risk level
    Run {
        /// best-first, beam, astar or aostar
        #[arg(short, long)]
        algorithm: Algorithm,

        /// Low_Risk, Medium_Risk or High_Risk
        #[arg(short, long)]
        goal: RiskLevel,
    },

    /// Run every algorithm towards a risk level and compare timings
    Compare {
        /// Low_Risk, Medium_Risk or High_Risk
        #[arg(short, long)]
        goal: RiskLevel,
    },

    /// Print nodes, heuristics and edges
    Graph,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> SearchResult<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::from_json_file(path)?,
        None => SearchConfig::default(),
    };
    if let Some(width) = args.beam_width {
        config = config.with_beam_width(width);
    }
    config.validate()?;
    debug!(?config, "loaded configuration");
    Ok(config)
}

fn run_one(
    graph: &Graph,
    algorithm: Algorithm,
    goal: RiskLevel,
    config: &SearchConfig,
    json: bool,
) -> SearchResult<()> {
    let report = run_search(graph, algorithm, goal, config)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
        if report.found() {
            println!("This path shows symptom assessment leading to risk level, aiding timely intervention.");
        }
    }
    Ok(())
}

fn compare(graph: &Graph, goal: RiskLevel, config: &SearchConfig, json: bool) -> SearchResult<()> {
    let mut history = RunHistory::new();
    for algorithm in Algorithm::ALL {
        history.record(run_search(graph, algorithm, goal, config)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    for report in history.reports() {
        println!(
            "{:<18} {:>3} expanded  {}",
            report.algorithm.name(),
            report.nodes_expanded,
            report.path_display()
        );
    }

    println!();
    println!("Algorithm Performance Comparison (seconds)");
    let timings = history.timings();
    let slowest = timings
        .iter()
        .map(|(_, t)| t.as_secs_f64())
        .fold(0.0_f64, f64::max);
    for (algorithm, elapsed) in &timings {
        let secs = elapsed.as_secs_f64();
        let width = if slowest > 0.0 {
            ((secs / slowest) * 40.0).round() as usize
        } else {
            0
        };
        println!("{:<18} {:<40} {:.6}", algorithm.name(), "#".repeat(width), secs);
    }
    Ok(())
}

fn print_graph(graph: &Graph) -> SearchResult<()> {
    println!("Health Risk Assessment Graph");
    for node in graph.nodes() {
        println!("{:<22} h={}", graph.label(node)?, graph.heuristic(node)?);
        for edge in graph.neighbors(node)? {
            println!(
                "    -> {:<22} cost={} h={}",
                graph.label(edge.target)?,
                edge.cost,
                edge.heuristic
            );
        }
    }
    Ok(())
}

fn execute(args: &Args) -> SearchResult<()> {
    let config = load_config(args)?;
    let graph = risk_graph();

    match &args.command {
        Command::Run { algorithm, goal } => run_one(graph, *algorithm, *goal, &config, args.json),
        Command::Compare { goal } => compare(graph, *goal, &config, args.json),
        Command::Graph => print_graph(graph),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
