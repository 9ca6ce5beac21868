use actix_web::{HttpRequest, HttpResponse, post, web};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::lookup_user;
use crate::error::ApiError;
use crate::state::AppState;

pub const MAX_FEEDBACK_CHARS: usize = 2000;

#[derive(Deserialize, Debug)]
pub struct FeedbackForm {
    pub message: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ApiError::InvalidFeedback("message is empty"));
        }
        if message.chars().count() > MAX_FEEDBACK_CHARS {
            return Err(ApiError::InvalidFeedback("message is too long"));
        }
        if let Some(r) = self.rating {
            if !(1..=5).contains(&r) {
                return Err(ApiError::InvalidFeedback("rating must be between 1 and 5"));
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FeedbackReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

#[post("/api/feedback")]
pub async fn feedback(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Json<FeedbackForm>,
) -> Result<HttpResponse, ApiError> {
    let user = lookup_user(&req, &state).await?.ok_or(ApiError::Unauthorized)?;
    form.validate()?;

    let receipt = FeedbackReceipt {
        id: Uuid::new_v4(),
        received_at: Utc::now(),
    };

    info!(
        "feedback {} from {} (rating {:?}): {}",
        receipt.id,
        user.id,
        form.rating,
        form.message.trim()
    );

    Ok(HttpResponse::Accepted().json(receipt))
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::{StatusCode, header};
    use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
    use actix_web::web::ServiceConfig;
    use actix_web::App;
    use serde_json::json;

    use super::*;
    use crate::api::session::SESSION_COOKIE;
    use crate::config::Config;
    use crate::testing::spawn_upstream;

    const GOOD_TOKEN: &str = "Bearer signed-in-token";

    fn form(message: &str, rating: Option<u8>) -> FeedbackForm {
        FeedbackForm {
            message: message.into(),
            rating,
        }
    }

    /// Identity provider that only knows `signed-in-token`.
    fn state() -> web::Data<AppState> {
        let base = spawn_upstream(|cfg: &mut ServiceConfig| {
            cfg.route(
                "/userinfo",
                web::get().to(|req: HttpRequest| async move {
                    let known = req
                        .headers()
                        .get(header::AUTHORIZATION)
                        .is_some_and(|v| v == GOOD_TOKEN);
                    if known {
                        HttpResponse::Ok().json(json!({ "sub": "user_1", "name": "Ada" }))
                    } else {
                        HttpResponse::Unauthorized().finish()
                    }
                }),
            );
        });
        let userinfo = format!("{base}/userinfo");
        let config = Config::for_tests_with(&[("IDENTITY_USERINFO_URL", userinfo.as_str())]);
        web::Data::new(AppState::new(config).unwrap())
    }

    fn post(cookie: Option<&str>, body: serde_json::Value) -> TestRequest {
        let req = TestRequest::post().uri("/api/feedback").set_json(body);
        match cookie {
            Some(token) => req.cookie(Cookie::new(SESSION_COOKIE, token.to_owned())),
            None => req,
        }
    }

    #[test]
    fn validation_rules() {
        assert!(form("nice site", None).validate().is_ok());
        assert!(form("nice site", Some(5)).validate().is_ok());
        assert!(form("   \n", None).validate().is_err());
        assert!(form("ok", Some(0)).validate().is_err());
        assert!(form("ok", Some(6)).validate().is_err());
        assert!(form(&"x".repeat(MAX_FEEDBACK_CHARS), None).validate().is_ok());
        assert!(form(&"x".repeat(MAX_FEEDBACK_CHARS + 1), None).validate().is_err());
    }

    #[actix_web::test]
    async fn anonymous_feedback_is_refused() {
        let app = init_service(App::new().app_data(state()).service(feedback)).await;

        let resp = call_service(&app, post(None, json!({ "message": "hello" })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn made_up_session_cookie_is_refused() {
        let app = init_service(App::new().app_data(state()).service(feedback)).await;

        let req = post(Some("definitely-not-a-real-token"), json!({ "message": "spam" })).to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn invalid_feedback_is_a_bad_request() {
        let app = init_service(App::new().app_data(state()).service(feedback)).await;

        let req = post(Some("signed-in-token"), json!({ "message": "  ", "rating": 3 })).to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn signed_in_feedback_is_accepted() {
        let app = init_service(App::new().app_data(state()).service(feedback)).await;

        let req = post(
            Some("signed-in-token"),
            json!({ "message": "love the projects", "rating": 4 }),
        )
        .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        let receipt: FeedbackReceipt = read_body_json(resp).await;
        assert!(receipt.received_at <= Utc::now());
    }
}
