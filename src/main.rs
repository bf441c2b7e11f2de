// Evaluates the bundled reference set and prints its RMSE.
// Log verbosity follows RUST_LOG (default: info); logs go to stderr.
use rmse_eval::{reference_pair, Rmse};

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (observed, predicted) = reference_pair();
    match Rmse::report(observed, predicted) {
        Ok(report) => {
            tracing::info!(samples = report.samples, mse = report.mse, "evaluated reference set");
            println!("{}", report.rmse);
        }
        Err(e) => {
            tracing::error!("rmse evaluation failed: {e}");
            std::process::exit(1);
        }
    }
}
