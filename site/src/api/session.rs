use actix_web::{
    HttpRequest, HttpResponse, cookie::Cookie, get, http::header, web,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Cookie the identity provider sets once the visitor has signed in.
pub const SESSION_COOKIE: &str = "__session";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionDto {
    pub signed_in: bool,
    pub user: Option<UserDto>,
}

impl SessionDto {
    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            user: None,
        }
    }
}

/// Maps an OpenID userinfo document onto the user shown in the navbar.
pub fn user_from_userinfo(info: &serde_json::Value) -> Option<UserDto> {
    let field = |key: &str| {
        info.get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    let id = field("sub")?;
    let name = field("name")
        .or_else(|| field("preferred_username"))
        .or_else(|| field("email"))
        .unwrap_or_else(|| "Anonymous".to_string());

    Some(UserDto {
        id,
        name,
        avatar_url: field("picture"),
    })
}

/// Resolves the visitor behind the session cookie.
///
/// `None` when there is no cookie or the identity provider rejects it.
pub async fn lookup_user(req: &HttpRequest, state: &AppState) -> Result<Option<UserDto>, ApiError> {
    let Some(cookie) = req.cookie(SESSION_COOKIE) else {
        return Ok(None);
    };

    let resp = state
        .http
        .get(state.config.identity.userinfo_url.clone())
        .bearer_auth(cookie.value())
        .send()
        .await?;

    if matches!(
        resp.status(),
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN
    ) {
        debug!("identity provider rejected session token ({})", resp.status());
        return Ok(None);
    }

    let info: serde_json::Value = resp.error_for_status()?.json().await?;
    user_from_userinfo(&info)
        .map(Some)
        .ok_or(ApiError::UpstreamShape("userinfo without sub"))
}

#[get("/api/session")]
pub async fn session(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<web::Json<SessionDto>, ApiError> {
    let session = match lookup_user(&req, &state).await? {
        Some(user) => SessionDto {
            signed_in: true,
            user: Some(user),
        },
        None => SessionDto::signed_out(),
    };
    Ok(web::Json(session))
}

#[get("/sign-in")]
pub async fn sign_in(state: web::Data<AppState>) -> HttpResponse {
    let mut target = state.config.identity.sign_in_url.clone();
    target
        .query_pairs_mut()
        .append_pair("redirect_url", state.config.public_url.as_str());

    HttpResponse::Found()
        .insert_header((header::LOCATION, target.as_str()))
        .finish()
}

#[get("/sign-out")]
pub async fn sign_out() -> HttpResponse {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();

    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .cookie(cookie)
        .finish()
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_and_read_body_json, call_service, init_service};
    use actix_web::web::ServiceConfig;
    use actix_web::App;
    use serde_json::json;

    use super::*;
    use crate::config::Config;
    use crate::testing::spawn_upstream;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(Config::for_tests()).unwrap())
    }

    fn state_with_provider(configure: impl Fn(&mut ServiceConfig) + Send + Clone + 'static) -> web::Data<AppState> {
        let base = spawn_upstream(configure);
        let userinfo = format!("{base}/userinfo");
        let config = Config::for_tests_with(&[("IDENTITY_USERINFO_URL", userinfo.as_str())]);
        web::Data::new(AppState::new(config).unwrap())
    }

    async fn session_for(state: web::Data<AppState>, token: &str) -> actix_web::dev::ServiceResponse {
        let app = init_service(App::new().app_data(state).service(session)).await;
        let req = TestRequest::get()
            .uri("/api/session")
            .cookie(Cookie::new(SESSION_COOKIE, token.to_owned()))
            .to_request();
        call_service(&app, req).await
    }

    #[test]
    fn userinfo_prefers_display_name() {
        let user = user_from_userinfo(&json!({
            "sub": "user_1",
            "name": "Ada",
            "email": "ada@example.com",
            "picture": "https://img.example/ada.png"
        }))
        .unwrap();
        assert_eq!(user.id, "user_1");
        assert_eq!(user.name, "Ada");
        assert_eq!(user.avatar_url.as_deref(), Some("https://img.example/ada.png"));
    }

    #[test]
    fn userinfo_name_falls_back() {
        let user = user_from_userinfo(&json!({ "sub": "u", "email": "x@example.com" })).unwrap();
        assert_eq!(user.name, "x@example.com");

        let user = user_from_userinfo(&json!({ "sub": "u", "name": "" })).unwrap();
        assert_eq!(user.name, "Anonymous");
        assert_eq!(user.avatar_url, None);
    }

    #[test]
    fn userinfo_without_subject_is_rejected() {
        assert_eq!(user_from_userinfo(&json!({ "name": "Ghost" })), None);
    }

    #[actix_web::test]
    async fn no_cookie_means_signed_out() {
        let app = init_service(App::new().app_data(state()).service(session)).await;

        let req = TestRequest::get().uri("/api/session").to_request();
        let body: SessionDto = call_and_read_body_json(&app, req).await;
        assert_eq!(body, SessionDto::signed_out());
    }

    #[actix_web::test]
    async fn accepted_token_yields_the_provider_user() {
        let state = state_with_provider(|cfg: &mut ServiceConfig| {
            cfg.route(
                "/userinfo",
                web::get().to(|req: HttpRequest| async move {
                    let authorized = req
                        .headers()
                        .get(header::AUTHORIZATION)
                        .is_some_and(|v| v == "Bearer good-token");
                    if authorized {
                        HttpResponse::Ok().json(json!({ "sub": "user_7", "name": "Grace" }))
                    } else {
                        HttpResponse::Unauthorized().finish()
                    }
                }),
            );
        });

        let resp = session_for(state, "good-token").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: SessionDto = actix_web::test::read_body_json(resp).await;
        assert!(body.signed_in);
        let user = body.user.unwrap();
        assert_eq!(user.id, "user_7");
        assert_eq!(user.name, "Grace");
    }

    #[actix_web::test]
    async fn rejected_token_is_signed_out() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let code = status.as_u16();
            let state = state_with_provider(move |cfg: &mut ServiceConfig| {
                cfg.route(
                    "/userinfo",
                    web::get().to(move || async move {
                        HttpResponse::build(StatusCode::from_u16(code).unwrap()).finish()
                    }),
                );
            });

            let resp = session_for(state, "stale").await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: SessionDto = actix_web::test::read_body_json(resp).await;
            assert_eq!(body, SessionDto::signed_out(), "provider answered {status}");
        }
    }

    #[actix_web::test]
    async fn userinfo_without_subject_is_a_bad_gateway() {
        let state = state_with_provider(|cfg: &mut ServiceConfig| {
            cfg.route(
                "/userinfo",
                web::get().to(|| async { HttpResponse::Ok().json(json!({ "name": "nobody" })) }),
            );
        });

        let resp = session_for(state, "whatever").await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn sign_in_redirects_to_provider_with_public_url() {
        let config = Config::for_tests_with(&[("SITE_PUBLIC_URL", "https://folio.example/")]);
        let state = web::Data::new(AppState::new(config).unwrap());
        let app = init_service(App::new().app_data(state).service(sign_in)).await;

        let req = TestRequest::get()
            .uri("/sign-in")
            .insert_header((header::HOST, "folio.test"))
            .insert_header(("x-forwarded-host", "evil.example"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);

        let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap();
        assert_eq!(
            location,
            "https://id.example.test/sign-in?redirect_url=https%3A%2F%2Ffolio.example%2F"
        );
    }

    #[actix_web::test]
    async fn sign_out_expires_session_cookie() {
        let app = init_service(App::new().service(sign_out)).await;

        let req = TestRequest::get()
            .uri("/sign-out")
            .cookie(Cookie::new(SESSION_COOKIE, "token"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

        let removed = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .expect("removal cookie");
        assert_eq!(removed.value(), "");
        assert_eq!(removed.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
    }
}
