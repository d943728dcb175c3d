#[tokio::main]
async fn main() {
    if let Err(err) = meridian_site_api::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
