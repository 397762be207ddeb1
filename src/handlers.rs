use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use actix_web::http::{Method, StatusCode};
use actix_web::web::{Data, Payload};
use actix_web::{HttpRequest, HttpResponse};
use futures::StreamExt;

use crate::errors::AssistantError;
use crate::models::chat::{ChatReply, ChatRequest};
use crate::service::AssistantService;

fn respond(status: StatusCode, reply: ChatReply, preflight_headers: bool) -> HttpResponse {
    let mut builder = HttpResponse::build(status);
    builder.insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
    if preflight_headers {
        builder
            .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
            .insert_header((ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"));
    }
    builder.json(reply)
}

pub fn error_response(error: &AssistantError) -> HttpResponse {
    match error {
        AssistantError::MethodNotAllowed(_) => respond(
            StatusCode::METHOD_NOT_ALLOWED,
            ChatReply::method_not_allowed(),
            true,
        ),
        AssistantError::ApiKeyMissing => respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            ChatReply::api_key_missing(),
            false,
        ),
        other => {
            log::error!("chat handler error: {:?}", other);
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                ChatReply::failure(other.to_string()),
                false,
            )
        }
    }
}

/// Collects the request body, failing once it grows past `limit` bytes.
async fn read_body(mut payload: Payload, limit: usize) -> Result<Vec<u8>, AssistantError> {
    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| AssistantError::MalformedInput(e.to_string()))?;
        if body.len() + chunk.len() > limit {
            return Err(AssistantError::PayloadTooLarge(limit));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

pub async fn chat(
    request: HttpRequest,
    payload: Payload,
    service: Data<AssistantService>,
) -> HttpResponse {
    if request.method() != Method::POST {
        log::info!("rejected {} {}", request.method(), request.path());
        return error_response(&AssistantError::MethodNotAllowed(
            request.method().to_string(),
        ));
    }

    // The body is only read past the method gate so any verb gets its 405.
    let body = match read_body(payload, service.config().max_body_bytes).await {
        Ok(body) => body,
        Err(e) => return error_response(&e),
    };

    let chat_request = match ChatRequest::from_body(&body) {
        Ok(chat_request) => chat_request,
        Err(e) => return error_response(&AssistantError::MalformedInput(e.to_string())),
    };
    log::debug!("request: {:?}", chat_request);

    match service.reply(&chat_request).await {
        Ok(text) => respond(StatusCode::OK, ChatReply::success(text), true),
        Err(e) => error_response(&e),
    }
}
