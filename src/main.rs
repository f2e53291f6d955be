#[tokio::main]
async fn main() {
    netio::run().await;
}
