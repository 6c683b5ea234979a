use anyhow::{bail, Result};
use calculator_mcp::{self_check, Calculator, CalculatorServer};
use clap::{Parser, Subcommand};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calculator-mcp")]
#[command(about = "Simple calculator exposed as MCP tools over stdio", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log filter directive, e.g. `info` or `calculator_mcp=debug`
    #[arg(short, long, env = "CALCULATOR_MCP_LOG", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the calculator tools over stdin/stdout (default)
    Serve,
    /// Run the built-in calculation checks and exit
    SelfCheck,
}

fn init_tracing(directive: &str) {
    // stdout carries the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

async fn serve() -> Result<()> {
    let server = CalculatorServer::new();
    let mut names: Vec<_> = server.tools().into_iter().map(|t| t.name).collect();
    names.sort();
    tracing::info!(tools = ?names, "starting calculator MCP server on stdio");

    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    tokio::select! {
        quit = service.waiting() => {
            let reason = quit?;
            tracing::info!(?reason, "calculator MCP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted, shutting down calculator MCP server");
        }
    }
    Ok(())
}

fn run_self_check() -> Result<()> {
    let outcomes = self_check::run(&Calculator::new());
    for outcome in &outcomes {
        println!("{outcome}");
    }

    let failed: Vec<_> = outcomes
        .iter()
        .filter(|o| !o.passed)
        .map(|o| o.name)
        .collect();
    if !failed.is_empty() {
        bail!("self-check failed: {}", failed.join(", "));
    }
    println!("all {} checks passed", outcomes.len());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::SelfCheck => run_self_check(),
    }
}
