use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use requisitoriados_proxy::api::{LOOKUP_PATH, create_router};
use requisitoriados_proxy::cli;
use requisitoriados_proxy::config::CONFIG;
use requisitoriados_proxy::upstream::HttpFetcher;
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(version, about = "Relays recompensas.pe requisitoriados listings as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the lookup endpoint over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run a single lookup and print the JSON envelope
    Lookup {
        /// Name or surname to search for
        #[arg(required = true)]
        query: Vec<String>,
        /// Leave the raw html out of the output
        #[arg(long)]
        no_html: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(CONFIG.tracing_level())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match args.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            serve(host, port).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Lookup { query, no_html } => {
            cli::run_lookup(
                &HttpFetcher::new(),
                &query.join(" "),
                no_html,
                &mut std::io::stdout(),
                &mut std::io::stderr(),
            )
            .await
        }
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| CONFIG.host.clone());
    let port = port.unwrap_or(CONFIG.port);
    let addr = format!("{host}:{port}");

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}, lookups at {LOOKUP_PATH}?q=");

    let app = create_router(Arc::new(HttpFetcher::new()));
    axum::serve(listener, app).await?;
    Ok(())
}
