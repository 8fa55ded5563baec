use clap::{Parser, Subcommand};
use std::sync::Arc;

use sift::api::create_router;
use sift::config::CONFIG;
use sift::pipeline::DefaultPipeline;

#[derive(Parser)]
#[command(name = "sift", about = "Search result digests from a single query")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web UI and JSON API
    Serve {
        /// Address to listen on, overrides SIFT_BIND_ADDR
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run one query and print the digest
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let pipeline = Arc::new(DefaultPipeline::from_config(&CONFIG.search)?);

    match cli.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| CONFIG.bind_addr.clone());
            let app = create_router(pipeline, &CONFIG.static_dir);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Server starting on http://{addr}");
            axum::serve(listener, app).await?;
        }
        Command::Search { query } => {
            let query = query.join(" ");
            let outcome = pipeline.handle(&query).await?;
            println!("{}\n", outcome.summary);
            for result in &outcome.results {
                println!("{}\n  {}", result.title(), result.url());
            }
        }
    }
    Ok(())
}
