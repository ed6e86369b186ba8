//! HTTP handlers and route configuration.

mod blogs;
mod files;
mod generate;
mod health;
mod pages;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Pages
        .route("/", web::get().to(pages::home))
        .route("/posts/{id}", web::get().to(pages::post_page))
        .route("/health", web::get().to(health::health_check))
        // Blog API
        .route("/blogs", web::get().to(blogs::list_posts))
        .route("/blogs/", web::post().to(blogs::insert_posts))
        .route("/blogs/{id}", web::get().to(blogs::get_post))
        // Text generation
        .route("/generate-text", web::post().to(generate::generate_text))
        // Uploads
        .route("/files/", web::post().to(files::create_file))
        .route("/uploadfile/", web::post().to(files::create_upload_file));
}
