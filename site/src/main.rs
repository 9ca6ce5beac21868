use actix_files::{Files, NamedFile};
use actix_web::{
    App, HttpServer,
    dev::{ServiceRequest, ServiceResponse, fn_service},
    middleware::Logger,
    web,
};
use log::info;

mod api;
mod config;
mod error;
mod state;
#[cfg(test)]
mod testing;

use config::Config;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let bind = (config.host.clone(), config.port);
    let state = web::Data::new(AppState::new(config)?);

    info!("serving {} on http://{}:{}", state.config.dist_dir.display(), bind.0, bind.1);

    HttpServer::new(move || {
        let dist = state.config.dist_dir.clone();
        let index = dist.join("index.html");

        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::routes)
            // top-level static assets
            .service(Files::new("/assets", state.config.assets_dir.clone()))
            // SPA bundle, unknown paths fall back to index.html for client routing
            .service(
                Files::new("/", dist)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(index).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
