#[tokio::main]
async fn main() {
    series_rate_be::start_server().await;
}
