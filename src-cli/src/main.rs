#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    vibe_cli::run().await
}
