#[tokio::main]
async fn main() {
    platemap_server::start_server().await;
}
