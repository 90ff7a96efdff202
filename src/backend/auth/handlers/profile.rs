/**
 * Profile Update Handler
 *
 * POST /api/user/update changes the signed-in member's name, email, bio and
 * avatar. The body is `multipart/form-data`:
 *
 * - `name` (required)
 * - `email` (required)
 * - `bio` (optional; blank clears it)
 * - `avatar` (optional file; an empty file keeps the current avatar)
 *
 * The member comes from the session, never from the form.
 */

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::Json,
};

use crate::backend::auth::gateway::{AuthGateway, ProfileUpdate, AVATAR_FOLDER};
use crate::backend::auth::handlers::types::ProfileResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::MaybeUser;
use crate::backend::repository::MediaUpload;

/// Profile update handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid session
/// * `404 Not Found` - The session's member no longer exists
/// * `400 Bad Request` - Missing name or email, or an unreadable form
/// * `409 Conflict` - Email belongs to another member
/// * `500 Internal Server Error` - Content store or media upload failure
pub async fn update_profile(
    State(gateway): State<Arc<AuthGateway>>,
    MaybeUser(session): MaybeUser,
    multipart: Multipart,
) -> Result<Json<ProfileResponse>, BackendError> {
    let id = session.ok_or_else(|| BackendError::unauthorized("Unauthorized"))?;

    let update = read_form(multipart).await?;
    let user = gateway.update_profile(Some(&id), update).await?;

    Ok(Json(ProfileResponse {
        user,
        message: "Profile updated successfully".to_string(),
    }))
}

async fn read_form(mut multipart: Multipart) -> Result<ProfileUpdate, BackendError> {
    let mut update = ProfileUpdate::default();

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "name" => update.name = field.text().await.map_err(form_error)?,
            "email" => update.email = field.text().await.map_err(form_error)?,
            "bio" => update.bio = Some(field.text().await.map_err(form_error)?),
            "avatar" => {
                let file_name = field.file_name().unwrap_or("avatar").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(form_error)?;
                update.avatar = Some(MediaUpload {
                    file_name,
                    content_type,
                    bytes,
                    folder: AVATAR_FOLDER.to_string(),
                });
            }
            other => tracing::debug!("Ignoring profile form field {:?}", other),
        }
    }

    Ok(update)
}

fn form_error(e: axum::extract::multipart::MultipartError) -> BackendError {
    BackendError::validation("form", format!("Invalid form data: {}", e))
}
