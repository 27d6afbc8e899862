//! Sidecraft
//!
//! Headless entry point that delegates to the app module.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting sidecraft...");
    sidecraft::run_game()
}
