use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::Value;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{QuizRequest, QuizRequestDto},
};

/// JSON extractor settings: unreadable bodies get the same 400 as missing fields.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!(
            "[{}] Rejected quiz request body: {}",
            get_request_id(req).unwrap_or_default(),
            err
        );
        AppError::InvalidFormat(err.to_string()).into()
    })
}

#[post("/quiz")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();

    let request = QuizRequestDto::from_body(body.into_inner())
        .and_then(|dto| QuizRequest::try_from(dto).map_err(AppError::from))
        .map_err(|e| {
            log::warn!("[{}] Invalid quiz request: {}", request_id, e);
            e
        })?;

    match state.quiz_service.generate_quiz(&request).await {
        Ok(payload) => Ok(HttpResponse::Ok().json(payload)),
        Err(err) => {
            match &err {
                AppError::Model(model_err) => log::error!(
                    "[{}] Model request failed ({}): {}",
                    request_id,
                    model_err.kind(),
                    model_err
                ),
                other => log::warn!("[{}] Quiz request failed: {}", request_id, other),
            }
            Err(err)
        }
    }
}
