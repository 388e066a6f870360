use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    finpre_cli::run_cli().await
}
