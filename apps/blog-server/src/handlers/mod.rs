//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;
mod share;

#[cfg(test)]
mod tests;

use actix_web::{HttpRequest, HttpResponse, http::header::ContentType, web};
use maud::Markup;

use crate::middleware::error::{AppError, AppResult};

/// Largest urlencoded form body accepted (2.5 MiB).
pub const MAX_FORM_BYTES: usize = 2_621_440;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _| AppError::NotFound(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::FormConfig::default()
            .limit(MAX_FORM_BYTES)
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/health", web::get().to(health::health_check))
    .route("/", web::get().to(posts::post_list))
    .route(
        r"/{year:\d+}/{month:\d+}/{day:\d+}/{slug}/",
        web::get().to(posts::post_detail),
    )
    .service(
        web::resource(r"/{post_id:\d+}/share/")
            .route(web::get().to(share::share_form))
            .route(web::post().to(share::share_post))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource(r"/{post_id:\d+}/comment/")
            .route(web::post().to(comments::post_comment))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Fallback for paths no route matches.
pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(req.path().to_string()))
}

async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}

/// Unwrap a form extracted after the target post was found, so a missing post
/// wins over a malformed body.
fn parsed_form<T>(form: Option<web::Form<T>>) -> AppResult<T> {
    form.map(web::Form::into_inner)
        .ok_or_else(|| AppError::BadRequest("malformed form body".to_string()))
}

fn html(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup.into_string())
}
