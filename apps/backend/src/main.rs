#[tokio::main]
async fn main() -> anyhow::Result<()> {
    decklist_backend::run().await
}
