//! mongoscope - MongoDB browsing gateway
//!
//! A small CLI over the gateway library: verify connectivity, list the
//! database/collection tree, and fetch the documents of a collection.
//!
//! # Usage
//!
//! ```bash
//! mongoscope --host db.internal check
//! mongoscope tree
//! mongoscope fetch orders invoices
//! ```

use tracing::Level;

use mongoscope::cli::{CliInterface, Commands};
use mongoscope::error::Result;
use mongoscope::formatter::{self, JsonFormatter};
use mongoscope::gateway::Gateway;
use mongoscope::model::CollectionInfo;
use mongoscope::query::QueryOptions;

/// Application entry point
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// # Returns
/// * `Result<()>` - Success or error
async fn run() -> Result<()> {
    let cli = CliInterface::new()?;
    initialize_logging(&cli);

    let gateway = Gateway::new();
    let server = cli.server();

    match cli.args().command {
        Commands::Check => {
            gateway.verify(server).await?;
            if !cli.args().quiet {
                println!("OK: {} is reachable", server.address());
            }
        }
        Commands::Tree => {
            let tree = gateway.enumerate(server).await?;
            print!("{}", formatter::render_tree(&tree));
        }
        Commands::Fetch {
            ref database,
            ref collection,
        } => {
            let target = CollectionInfo::new(collection.clone(), database.clone());
            let result = gateway
                .fetch(server, &target, &QueryOptions::new())
                .await?;

            let json = JsonFormatter::new(!cli.args().compact, !cli.args().no_color, 2);
            println!("{}", json.format_result(&result)?);
            if !cli.args().quiet {
                eprintln!("{} document(s)", result.len());
            }
        }
    }

    Ok(())
}

/// Initialize logging system based on verbosity level
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    // Build subscriber with level filter
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    // Configure timestamps
    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
