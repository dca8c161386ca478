use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer, middleware};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use parpass::args;
use parpass::{AppState, HttpParPassApi, configure};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = args::args_checks();
    let api = HttpParPassApi::new(&args.api)?;
    let state = AppState::new(Arc::new(api));
    let static_dir = args.static_dir.clone();

    info!(
        api_url = %args.api.api_url,
        ml_api_url = %args.api.ml_api_url,
        host = %args.host,
        port = args.port,
        "starting ParPass frontend"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(Data::new(state.clone()))
            .configure(configure)
            .service(Files::new("/static", &static_dir))
    })
    .bind(args.bind_addr())?
    .run()
    .await?;
    Ok(())
}
