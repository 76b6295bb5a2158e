//! Media upload handler.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures::{StreamExt, TryStreamExt};

use arena_core::domain::Role;
use arena_shared::ApiResponse;
use arena_shared::dto::UploadResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Upload size cap: 5 MB.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Replace anything outside a conservative character set so the stored name
/// is safe as a path segment.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// POST /api/upload - Protected (editor or above)
///
/// Accepts a single multipart `file` field. Only image content types are
/// allowed and the payload is capped at 5 MB.
pub async fn upload(
    state: web::Data<AppState>,
    identity: Identity,
    mut payload: Multipart,
) -> AppResult<HttpResponse> {
    identity.require(Role::Editor)?;

    while let Ok(Some(mut field)) = payload.try_next().await {
        if field.name() != "file" {
            continue;
        }

        let is_image = field
            .content_type()
            .is_some_and(|mime| mime.essence_str().starts_with("image/"));
        if !is_image {
            return Err(AppError::BadRequest("Invalid file type".to_string()));
        }

        let original_name = field
            .content_disposition()
            .get_filename()
            .map(sanitize_file_name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "upload".to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(AppError::PayloadTooLarge(
                    "File exceeds the 5MB upload limit".to_string(),
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let file_name = format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            original_name
        );

        tokio::fs::create_dir_all(&state.media.dir)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create media dir: {e}")))?;
        let target = state.media.dir.join(&file_name);
        tokio::fs::write(&target, &bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store upload: {e}")))?;

        let url = format!(
            "{}/{}",
            state.media.base_url.trim_end_matches('/'),
            file_name
        );
        tracing::info!(path = %target.display(), size = bytes.len(), "File uploaded");
        return Ok(HttpResponse::Ok().json(ApiResponse::ok(UploadResponse { url })));
    }

    Err(AppError::BadRequest("No file provided".to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use uuid::Uuid;

    use arena_core::ports::TokenService;
    use arena_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService, UserDirectory};
    use arena_infra::storage::{
        LocalBlogRepository, LocalMatchRepository, LocalNewsRepository,
    };

    use crate::config::MediaConfig;
    use crate::importer::BlogImporter;
    use crate::state::AppState;

    use super::*;

    fn test_state(media_dir: PathBuf) -> AppState {
        let passwords = Argon2PasswordService::new();
        let users = UserDirectory::seeded("arenabulls2025", "editor2025", &passwords).unwrap();
        AppState {
            news: Arc::new(LocalNewsRepository::in_memory()),
            blogs: Arc::new(LocalBlogRepository::in_memory()),
            matches: Arc::new(LocalMatchRepository::in_memory()),
            users: Arc::new(users),
            importer: BlogImporter::new(),
            media: MediaConfig {
                dir: media_dir,
                base_url: "/media".to_string(),
            },
        }
    }

    fn multipart_body(content_type: &str, data: &[u8]) -> (String, Vec<u8>) {
        let boundary = "arenaboundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\n\
                 Content-Disposition: form-data; name=\"file\"; filename=\"logo.png\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        (format!("multipart/form-data; boundary={boundary}"), body)
    }

    async fn post_upload(content_type: &str, data: &[u8]) -> StatusCode {
        let token_service: Arc<dyn TokenService> =
            Arc::new(JwtTokenService::new(JwtConfig::default()));
        let token = token_service
            .generate_token(Uuid::new_v4(), "editor", arena_core::domain::Role::Editor)
            .unwrap();

        let media_dir =
            std::env::temp_dir().join(format!("arena-upload-test-{}", Uuid::new_v4()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(media_dir.clone())))
                .app_data(web::Data::new(token_service))
                .route("/api/upload", web::post().to(upload)),
        )
        .await;

        let (mime, body) = multipart_body(content_type, data);
        let req = test::TestRequest::post()
            .uri("/api/upload")
            .insert_header(("authorization", format!("Bearer {token}")))
            .insert_header(("content-type", mime))
            .set_payload(body)
            .to_request();
        let status = test::call_service(&app, req).await.status();

        std::fs::remove_dir_all(&media_dir).ok();
        status
    }

    #[::core::prelude::v1::test]
    fn sanitizes_hostile_file_names() {
        assert_eq!(sanitize_file_name("logo final.png"), "logo_final.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name("takım-görsel.jpg"), "tak_m-g_rsel.jpg");
    }

    #[actix_web::test]
    async fn rejects_non_image_content_type() {
        let status = post_upload("text/plain", b"not an image").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn accepts_small_image_payload() {
        let status = post_upload("image/png", &[0u8; 128]).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn rejects_payload_over_size_cap() {
        let data = vec![0u8; MAX_UPLOAD_BYTES + 1];
        let status = post_upload("image/png", &data).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
