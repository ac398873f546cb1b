//! ctxbundle CLI - keyword-driven context bundler
//!
//! Expands keywords into related terms, selects the source files that
//! mention them and writes a compressed JSON digest grouped by category.
//!
//! # Examples
//!
//! ```bash
//! # Bundle files related to image uploads in the current directory
//! ctxbundle bundle image upload
//!
//! # Scan another tree without network lookups
//! ctxbundle bundle auth --root ../shop --offline -o auth.json
//!
//! # Inspect the expanded keyword set
//! ctxbundle expand server --format json
//!
//! # Show configuration
//! ctxbundle show-config
//! ```

use clap::Parser;
use ctxbundle::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "ctxbundle=info"
    } else {
        "ctxbundle=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // stdout carries command output
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
