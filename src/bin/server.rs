//! RHCP Server Binary
//!
//! Starts the TCP server for the RHCP status protocol.

use clap::Parser;
use rhcp::network::Server;
use rhcp::store::CsvStore;
use rhcp::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// RHCP Server
#[derive(Parser, Debug)]
#[command(name = "rhcp-server")]
#[command(about = "TCP server for the RHCP status protocol")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:7070")]
    listen: String,

    /// Path to the CSV status store
    #[arg(short, long, default_value = "status.csv")]
    store: String,

    /// Connection read timeout (milliseconds)
    #[arg(long, default_value = "5000")]
    read_timeout_ms: u64,

    /// Connection write timeout (milliseconds)
    #[arg(long, default_value = "5000")]
    write_timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,rhcp=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("RHCP server v{}", rhcp::VERSION);
    tracing::info!("Store: {}", args.store);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .store_path(&args.store)
        .listen_addr(&args.listen)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .build();

    let store = CsvStore::new(&config.store_path);

    // Start server
    let server = Server::new(config, store);
    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
