//! Raw file uploads. Nothing is stored; the handlers only report what arrived.

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, http::header, web};
use futures::StreamExt;

use quill_shared::dto::{FileSizeResponse, MessageResponse, UploadFileResponse};

use crate::middleware::error::{AppError, AppResult};

/// Body limit for `POST /files/`.
pub const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;
/// Limit for the file part of `POST /uploadfile/`.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A file part pulled out of a multipart form.
struct FilePart {
    filename: Option<String>,
    data: Vec<u8>,
}

/// POST /files/
///
/// Reports the size of the `file` part of a `multipart/form-data` body. Any
/// other content type is counted as the raw file.
pub async fn create_file(req: HttpRequest, payload: web::Payload) -> AppResult<HttpResponse> {
    let size = if is_multipart(&req) {
        read_file_part(&req, payload, MAX_FILE_BYTES)
            .await?
            .map(|part| part.data.len())
            .unwrap_or(0)
    } else {
        read_raw_body(payload, MAX_FILE_BYTES).await?
    };

    if size == 0 {
        return Ok(HttpResponse::Ok().json(MessageResponse::new("No file sent")));
    }

    Ok(HttpResponse::Ok().json(FileSizeResponse { file_size: size }))
}

/// POST /uploadfile/
///
/// Reads the first file part of a `multipart/form-data` body and parses it as JSON.
pub async fn create_upload_file(
    req: HttpRequest,
    payload: web::Payload,
) -> AppResult<HttpResponse> {
    if !is_multipart(&req) {
        return Ok(no_upload());
    }

    let Some(FilePart { filename, data }) =
        read_file_part(&req, payload, MAX_UPLOAD_BYTES).await?
    else {
        return Ok(no_upload());
    };

    let content: serde_json::Value = serde_json::from_slice(&data)
        .map_err(|e| AppError::BadRequest(format!("Uploaded file is not valid JSON: {e}")))?;

    tracing::debug!(filename = ?filename, size = data.len(), "Upload parsed");
    Ok(HttpResponse::Ok().json(UploadFileResponse { filename, content }))
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

/// First part that carries a filename or is named `file`. `None` when the
/// form has no such part or the part is empty.
async fn read_file_part(
    req: &HttpRequest,
    payload: web::Payload,
    limit: usize,
) -> AppResult<Option<FilePart>> {
    let mut multipart = Multipart::new(req.headers(), payload);

    while let Some(item) = multipart.next().await {
        let mut field =
            item.map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?;

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned);
        if filename.is_none() && field.name() != Some("file") {
            continue;
        }

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk
                .map_err(|e| AppError::BadRequest(format!("Error reading upload field: {e}")))?;
            if data.len() + bytes.len() > limit {
                return Err(too_large(limit));
            }
            data.extend_from_slice(&bytes);
        }

        if data.is_empty() {
            return Ok(None);
        }
        return Ok(Some(FilePart { filename, data }));
    }

    Ok(None)
}

async fn read_raw_body(mut payload: web::Payload, limit: usize) -> AppResult<usize> {
    let mut size = 0;
    while let Some(chunk) = payload.next().await {
        let bytes =
            chunk.map_err(|e| AppError::BadRequest(format!("Error reading request body: {e}")))?;
        size += bytes.len();
        if size > limit {
            return Err(too_large(limit));
        }
    }
    Ok(size)
}

fn too_large(limit: usize) -> AppError {
    AppError::PayloadTooLarge(format!("upload exceeds {limit} bytes"))
}

fn no_upload() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("No upload file sent"))
}
