use actix_web::{App, HttpServer, web::ServiceConfig};

/// Starts a throwaway HTTP server standing in for a hosted service and
/// returns its base url.
pub fn spawn_upstream<F>(configure: F) -> String
where
    F: Fn(&mut ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind upstream");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}
