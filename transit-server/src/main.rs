use std::io::Read;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use transit_server::render::RenderSettings;
use transit_server::requests::{InputDocument, build_network, process_document};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Serve mode when a listen address is configured; otherwise one-shot
    // batch mode over stdin/stdout.
    match std::env::var("TRANSIT_LISTEN_ADDR") {
        Ok(addr) => serve(&addr).await,
        Err(_) => batch(),
    }
}

/// Read one JSON document from stdin and write the reply array to stdout.
fn batch() {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .expect("Failed to read stdin");

    let document = match InputDocument::from_json(&input) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let replies = process_document(document);
    let output = serde_json::to_string(&replies).expect("Replies always serialize");
    println!("{output}");
}

/// Load the network document from a file and serve queries over HTTP.
async fn serve(addr: &str) {
    let path = std::env::var("TRANSIT_NETWORK_FILE").unwrap_or_else(|_| {
        eprintln!("Error: TRANSIT_NETWORK_FILE must be set in serve mode");
        std::process::exit(2);
    });

    let document = match InputDocument::load(&path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let settings = document
        .render_settings
        .map(RenderSettings::from)
        .unwrap_or_default();
    let network = build_network(document.base_requests);

    let state = AppState::new(network, settings);
    let app = create_router(state);

    let addr: SocketAddr = addr
        .parse()
        .expect("TRANSIT_LISTEN_ADDR must be a socket address like 127.0.0.1:3000");
    println!("Transit catalogue listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /routes/:id    - Aggregate metrics for a route");
    println!("  GET  /stops/:name   - Routes serving a stop");
    println!("  GET  /map           - SVG map of the network");
    println!("  POST /queries       - Batch stat requests");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
