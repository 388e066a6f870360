pub mod agent;
pub mod app;
pub mod widgets;

pub use app::run_app;

use anyhow::Result;
use finpre_common::FinpreConfig;

/// Run the interactive viewer. Each run starts Idle with the configured
/// starting topic; nothing is persisted across sessions.
pub async fn run_main(config: FinpreConfig) -> Result<()> {
    run_app(config).await
}
