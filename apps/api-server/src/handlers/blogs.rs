//! Blog post JSON API.

use actix_web::{HttpResponse, web};

use quill_core::DomainError;
use quill_core::domain::{BlogPost, Projection, sample_posts};
use quill_shared::dto::{InsertPostsResponse, ListPostsQuery};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /blogs
///
/// `?fields=title,author` limits each post to the named fields.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    match query.fields.as_deref() {
        Some(fields) => {
            let projection = Projection::parse(fields)?;
            let posts = state.posts.list_projected(&projection).await?;
            Ok(HttpResponse::Ok().json(posts))
        }
        None => {
            let posts = state.posts.list_posts().await?;
            Ok(HttpResponse::Ok().json(posts))
        }
    }
}

/// GET /blogs/{id}
pub async fn get_post(
    state: web::Data<AppState>,
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

    Ok(HttpResponse::Ok().json(post))
}

/// POST /blogs/
///
/// Body is a JSON array of posts. An empty body inserts the sample set.
pub async fn insert_posts(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let posts: Vec<BlogPost> = if body.iter().all(u8::is_ascii_whitespace) {
        tracing::info!("No posts supplied, inserting sample posts");
        sample_posts()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid blog post payload: {e}")))?
    };

    let inserted = state.posts.insert_many(posts).await?;
    tracing::info!(inserted, "Blog posts added");

    Ok(HttpResponse::Created().json(InsertPostsResponse {
        message: format!("{inserted} posts have been added"),
        inserted,
    }))
}
