//! Drunch Café CLI and REST API entry point.
//!
//! Binary name: `drunch`
//!
//! Parses CLI arguments, initializes the database and services, then
//! dispatches to the appropriate command handler or starts the REST API
//! server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,drunch=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "drunch", &mut std::io::stdout());
        return Ok(());
    }

    // The assistant test command is pure, no database needed either
    if let Commands::Ask { question } = &cli.command {
        return cli::ask::ask(question, cli.json);
    }

    // Initialize application state (DB, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Menu { category, featured } => {
            cli::menu::show_menu(&state, category, featured, cli.json).await?;
        }

        Commands::Orders { limit } => {
            cli::records::list_orders(&state, limit, cli.json).await?;
        }

        Commands::Reservations { limit } => {
            cli::records::list_reservations(&state, limit, cli.json).await?;
        }

        Commands::Messages { limit } => {
            cli::records::list_messages(&state, limit, cli.json).await?;
        }

        Commands::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| state.config.http_addr.clone());
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Drunch Café API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }

        // Handled above, before state init.
        Commands::Ask { .. } | Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
