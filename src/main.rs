//! Lattice service entry point.

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lattice::api::{create_router, serve, ApiState, RestApiConfig};
use lattice::config::Config;
use lattice::graph::{read_graph, write_graph, GraphBuilder};
use lattice::parse::RemoteParser;
use lattice::query::QueryEngine;
use lattice::sources::read_paragraphs;

/// Lattice: entity-relationship graph extraction and query service.
#[derive(Parser, Debug)]
#[command(name = "lattice")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a graph from a CSV of paragraphs and persist it
    Build {
        /// CSV file to read (defaults to the configured source path)
        #[arg(short, long)]
        input: Option<String>,
        /// Output graph document (defaults to the configured data file)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Answer one query against a persisted graph
    Query {
        /// Query text
        query: String,
        /// Graph document to load (defaults to the configured data file)
        #[arg(short, long)]
        graph: Option<String>,
    },
    /// Load the persisted graph and serve the query API
    Serve {
        /// HTTP port (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match args.command {
        Command::Build { input, output } => run_build(config, input, output).await,
        Command::Query { query, graph } => run_query(config, query, graph),
        Command::Serve { port } => run_serve(config, port).await,
    }
}

fn parser_for(config: &Config) -> Arc<RemoteParser> {
    Arc::new(RemoteParser::new(
        config.parser.endpoint.clone(),
        Duration::from_secs(config.parser.timeout_secs),
    ))
}

async fn run_build(
    config: Config,
    input: Option<String>,
    output: Option<String>,
) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| config.source.path.clone());
    let output = output
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| config.graph_file());

    let paragraphs = read_paragraphs(&input, &config.source.column)?;
    let builder = GraphBuilder::new(parser_for(&config));
    let graph = builder.build(&paragraphs).await?;
    write_graph(&graph, &output)?;

    println!(
        "Built graph with {} nodes and {} edges from {} units -> {}",
        graph.node_count(),
        graph.edge_count(),
        paragraphs.len(),
        output.display()
    );
    Ok(())
}

fn run_query(config: Config, query: String, graph: Option<String>) -> anyhow::Result<()> {
    let path = graph
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| config.graph_file());
    let graph = read_graph(&path)?;

    let engine = QueryEngine::new(Arc::new(graph));
    println!("{}", engine.answer(&query));
    Ok(())
}

async fn run_serve(config: Config, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.unwrap_or(config.server.port);
    let graph = read_graph(config.graph_file())?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let parser = parser_for(&config);
    let rest_config = RestApiConfig::from(&config.server);
    let state = Arc::new(ApiState::new(graph, parser, config));
    let router = create_router(state, &rest_config);

    serve(router, port).await?;
    Ok(())
}
