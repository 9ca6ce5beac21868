pub mod feedback;
pub mod projects;
pub mod session;

use actix_web::web::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(projects::projects)
        .service(session::session)
        .service(session::sign_in)
        .service(session::sign_out)
        .service(feedback::feedback);
}
