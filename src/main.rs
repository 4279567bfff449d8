//! CalTrack
//!
//! An MCP server for calorie targets, macro splits, BMI and meal analytics.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use caltrack::build_info;
use caltrack::mcp::CalorieService;
use caltrack::models::DEFAULT_CALORIE_TARGET;

/// Get the default daily calorie target from environment or use 2000
fn get_default_calorie_target() -> i64 {
    match std::env::var("CALTRACK_DEFAULT_TARGET") {
        Ok(raw) => match raw.trim().parse::<i64>() {
            Ok(target) if target > 0 => target,
            _ => {
                tracing::warn!(
                    "Ignoring CALTRACK_DEFAULT_TARGET='{}', using {}",
                    raw,
                    DEFAULT_CALORIE_TARGET
                );
                DEFAULT_CALORIE_TARGET
            }
        },
        Err(_) => DEFAULT_CALORIE_TARGET,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so it does not interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("caltrack=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let default_target = get_default_calorie_target();
    tracing::info!("Default calorie target: {} kcal", default_target);

    let service = CalorieService::new(default_target);

    tracing::info!("Starting MCP server on stdio...");
    let server = service.serve((stdin(), stdout())).await?;

    server.waiting().await?;

    Ok(())
}
