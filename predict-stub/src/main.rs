//! Predict stub CLI
//!
//! ```bash
//! predict-stub                          # Cat at 87% on port 5000
//! predict-stub --score 0.92             # Dog at 92%
//! predict-stub --fail-status 503        # every upload fails
//! predict-stub --latency-ms 1500        # slow answers
//! ```
//!
//! Every flag can also be set through `PREDICT_STUB_*` variables or `.env`.

use clap::Parser;
use predict_stub::{ServerError, StubConfig, DEFAULT_PORT, DEFAULT_SCORE};

#[derive(Parser)]
#[command(name = "predict-stub")]
#[command(about = "Serve scripted Cat vs Dog predictions on POST /predict", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PREDICT_STUB_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Raw model score in [0, 1]; above 0.5 is Dog
    #[arg(short, long, env = "PREDICT_STUB_SCORE", default_value_t = DEFAULT_SCORE)]
    score: f64,

    /// Reject every valid upload with this HTTP status
    #[arg(long, env = "PREDICT_STUB_FAIL_STATUS")]
    fail_status: Option<u16>,

    /// Delay before each answer, in milliseconds
    #[arg(long, env = "PREDICT_STUB_LATENCY_MS", default_value_t = 0)]
    latency_ms: u64,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    let config = StubConfig::new(cli.score, cli.fail_status, cli.latency_ms)?;
    predict_stub::server::start_server(cli.port, config).await
}
