use ewaste_pickup::config::Config;
use ewaste_pickup::engine::Engine;
use ewaste_pickup::error::Error;
use ewaste_pickup::external::OsrmClient;
use ewaste_pickup::receipt::PdfRenderer;
use ewaste_pickup::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let router = OsrmClient::new(&config.osrm_api_base, &config.osrm_profile);
    let bind_addr = config.bind_addr;

    let engine = Engine::new(config, router, PdfRenderer::new());

    serve(engine, bind_addr).await
}
