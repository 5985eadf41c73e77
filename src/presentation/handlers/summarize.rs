use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::domain::{DEFAULT_PROMPT_TYPE, Upload};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

struct SummarizeForm {
    upload: Option<Upload>,
    prompt_type: String,
    custom_prompt: Option<String>,
}

fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

fn form_error(context: &'static str) -> impl FnOnce(MultipartError) -> (StatusCode, String) {
    move |e| (e.status(), format!("Failed to read {}: {}", context, e.body_text()))
}

async fn read_form(mut multipart: Multipart) -> Result<SummarizeForm, (StatusCode, String)> {
    let mut upload = None;
    let mut prompt_type = None;
    let mut custom_prompt = None;

    while let Some(field) = multipart.next_field().await.map_err(form_error("form field"))? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let content_type = field.content_type().map(String::from);
                let data = field.bytes().await.map_err(form_error("file"))?.to_vec();

                upload = Some(Upload::new(filename, content_type, data));
            }
            "prompt_type" => {
                let val = field.text().await.map_err(form_error("prompt_type"))?;
                if !val.is_empty() {
                    prompt_type = Some(val);
                }
            }
            "custom_prompt" => {
                let val = field.text().await.map_err(form_error("custom_prompt"))?;
                if !val.is_empty() {
                    custom_prompt = Some(val);
                }
            }
            _ => {
                field.bytes().await.map_err(form_error("form field"))?;
            }
        }
    }

    Ok(SummarizeForm {
        upload,
        prompt_type: prompt_type.unwrap_or_else(|| DEFAULT_PROMPT_TYPE.to_string()),
        custom_prompt,
    })
}

#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_handler<E, L>(
    State(state): State<AppState<E, L>>,
    multipart: Multipart,
) -> Response
where
    E: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err((status, detail)) => {
            tracing::warn!(%status, error = %detail, "Malformed summarize request");
            return error_response(status, detail);
        }
    };

    tracing::info!(prompt_type = %form.prompt_type, "Received summarize request");
    if let Some(custom_prompt) = &form.custom_prompt {
        tracing::debug!(custom_prompt = %sanitize_prompt(custom_prompt), "Custom prompt supplied");
    }

    let Some(upload) = form.upload else {
        tracing::warn!("Summarize request with no file");
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    match state
        .summarization_service
        .summarize_upload(&upload, &form.prompt_type, form.custom_prompt.as_deref())
        .await
    {
        Ok(summary) => (
            StatusCode::OK,
            Json(SummaryResponse {
                summary: summary.into_string(),
            }),
        )
            .into_response(),
        Err(e) if e.is_client_error() => {
            tracing::warn!(error = %e, "Summarize request rejected");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Summarize request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
