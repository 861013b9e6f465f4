//! Axum route handlers for the candidate-facing commands.
//!
//! This is the boundary where raw input is validated: locale codes, form fields
//! and upload types are rejected here, so the session only ever sees typed values.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::session::{Greeted, SessionPhase};
use crate::interview::store::SharedSession;
use crate::locale::{resolve, Locale, TemplateBundle};
use crate::models::candidate::{CandidateProfile, ProfileForm};
use crate::models::resume::DocumentKind;
use crate::resume::ingest_upload;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub phase: SessionPhase,
    pub strings: &'static TemplateBundle,
}

#[derive(Debug, Deserialize)]
pub struct ChangeLocaleRequest {
    pub locale: String,
}

#[derive(Debug, Serialize)]
pub struct ChangeLocaleResponse {
    pub locale: Locale,
    /// False when the requested locale was already active (or the session ended).
    pub changed: bool,
    pub phase: SessionPhase,
    pub strings: &'static TemplateBundle,
}

#[derive(Debug, Serialize)]
pub struct SubmitProfileResponse {
    pub phase: SessionPhase,
    /// `None` when the submission was ignored (already greeted or ended).
    pub event: Option<Greeted>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// `None` when the message was ignored (blank, or the session ended).
    pub reply: Option<String>,
    pub phase: SessionPhase,
    pub history_len: usize,
}

/// A file part of the profile form, read once and handed to extraction.
struct Upload {
    filename: String,
    kind: DocumentKind,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/locales
pub async fn handle_list_locales() -> Json<Vec<&'static TemplateBundle>> {
    Json(Locale::ALL.iter().map(|l| l.bundle()).collect())
}

/// GET /api/v1/locales/:code
pub async fn handle_get_locale(
    Path(code): Path<String>,
) -> Result<Json<&'static TemplateBundle>, AppError> {
    Ok(Json(resolve(&code)?))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), AppError> {
    let locale = match req.locale.as_deref() {
        Some(code) => code.parse::<Locale>()?,
        None => Locale::default(),
    };
    let (session_id, session) = state.sessions.create(locale).await;
    let phase = session.lock().await.phase();

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id,
            phase,
            strings: locale.bundle(),
        }),
    ))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session = find_session(&state, id).await?;
    let mut session = session.lock().await;
    session.touch();
    let snapshot = serde_json::to_value(session.snapshot())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize session: {e}")))?;
    Ok(Json(snapshot))
}

/// PUT /api/v1/sessions/:id/locale
pub async fn handle_change_locale(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeLocaleRequest>,
) -> Result<Json<ChangeLocaleResponse>, AppError> {
    let locale = req.locale.parse::<Locale>()?;
    let session = find_session(&state, id).await?;
    let mut session = session.lock().await;
    session.touch();

    let changed = session.change_locale(locale);
    Ok(Json(ChangeLocaleResponse {
        locale: session.locale(),
        changed,
        phase: session.phase(),
        strings: session.locale().bundle(),
    }))
}

/// POST /api/v1/sessions/:id/profile
///
/// Multipart form: the text fields of `ProfileForm` plus an optional `resume`
/// file (PDF or DOCX). Question generation runs before the response is sent.
/// A session that is already greeted ignores the submission without
/// validating it.
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<SubmitProfileResponse>, AppError> {
    let session = find_session(&state, id).await?;
    let mut session = session.lock().await;
    session.touch();

    if !session.accepts_profile() {
        return Ok(Json(SubmitProfileResponse {
            phase: session.phase(),
            event: None,
        }));
    }

    let (form, upload) = read_profile_form(multipart).await?;
    let profile = CandidateProfile::from_form(&form)?;

    let resume = match upload {
        Some(upload) => Some(ingest_upload(upload.filename, upload.kind, upload.bytes).await),
        None => None,
    };

    let event = session
        .submit_profile(profile, resume, state.model.as_ref())
        .await;

    Ok(Json(SubmitProfileResponse {
        phase: session.phase(),
        event,
    }))
}

/// POST /api/v1/sessions/:id/chat
///
/// A session ended by `exit` is removed from the store once the farewell has
/// been produced; later requests for it get 404.
pub async fn handle_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session = find_session(&state, id).await?;
    let response = {
        let mut session = session.lock().await;
        session.touch();

        let reply = session
            .submit_chat_message(&req.message, state.model.as_ref())
            .await?;

        ChatResponse {
            reply,
            phase: session.phase(),
            history_len: session.history().len(),
        }
    };

    if response.phase == SessionPhase::Terminated {
        state.sessions.remove(id).await;
    }

    Ok(Json(response))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn find_session(state: &AppState, id: Uuid) -> Result<SharedSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// Reads every multipart field. Unknown fields are ignored; a `resume` part
/// with no filename or no content counts as "no upload".
async fn read_profile_form(
    mut multipart: Multipart,
) -> Result<(ProfileForm, Option<Upload>), AppError> {
    let mut form = ProfileForm::default();
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "resume" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read resume upload: {e}")))?;
            if filename.is_empty() || bytes.is_empty() {
                continue;
            }
            let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
                AppError::UnsupportedDocument(format!(
                    "'{filename}' is not a PDF or DOCX file"
                ))
            })?;
            upload = Some(Upload {
                filename,
                kind,
                bytes,
            });
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read field '{name}': {e}")))?;
        match name.as_str() {
            "name" => form.name = value,
            "email" => form.email = value,
            "phone" => form.phone = value,
            "experience" => form.experience = value,
            "position" => form.position = value,
            "location" => form.location = value,
            "qualification" => form.qualification = value,
            "college_name" => form.college_name = value,
            "tech_stack" => form.tech_stack = value,
            _ => {}
        }
    }

    Ok((form, upload))
}
