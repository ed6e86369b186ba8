//! Application-wide 404 page.
//!
//! Every 404 response is replaced with the rendered `404` template, unless
//! the client asked for JSON, in which case the problem body passes through.
//! Other error statuses are left alone.

use actix_web::{
    dev::ServiceResponse,
    http::{
        StatusCode,
        header::{self, ContentType},
    },
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    web, HttpRequest, HttpResponse,
};
use serde_json::json;

use crate::templates::{self, Templates};

/// Error handler middleware that owns the 404 page.
pub fn not_found_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::NOT_FOUND, render_not_found)
}

fn render_not_found<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    if prefers_json(res.request()) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let Some(pages) = res.request().app_data::<web::Data<Templates>>().cloned() else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };

    let context = json!({
        "path": res.request().path(),
        "year": templates::current_year(),
    });

    let body = match pages.render(templates::NOT_FOUND, &context) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "Falling back to plain 404");
            return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
        }
    };

    let (req, _) = res.into_parts();
    let page = HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(body);

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, page).map_into_right_body(),
    ))
}

fn prefers_json(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json") && !accept.contains("text/html"))
        .unwrap_or(false)
}
