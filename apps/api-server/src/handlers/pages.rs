//! Server-rendered HTML pages over the blog repository.

use actix_web::{HttpResponse, http::header::ContentType, web};
use serde_json::json;

use quill_core::DomainError;
use quill_core::domain::{PostField, Projection};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::templates::{self, Templates};

/// GET /
pub async fn home(
    state: web::Data<AppState>,
    pages: web::Data<Templates>,
) -> AppResult<HttpResponse> {
    let projection = Projection::new([
        PostField::Id,
        PostField::Title,
        PostField::Author,
        PostField::PublicationDate,
    ])?;
    let posts = state.posts.list_projected(&projection).await?;

    let body = pages.render(
        templates::INDEX,
        &json!({
            "message": "Hello, World!",
            "year": templates::current_year(),
            "posts": posts,
        }),
    )?;

    Ok(html(body))
}

/// GET /posts/{id}
pub async fn post_page(
    state: web::Data<AppState>,
    pages: web::Data<Templates>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(&id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Blog post",
            id,
        })?;

    let body = pages.render(
        templates::POST,
        &json!({
            "year": templates::current_year(),
            "post": post,
        }),
    )?;

    Ok(html(body))
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}
