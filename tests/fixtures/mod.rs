use serde_json::{Value, json};

use site_assistant::models::chat::ChatRequest;

pub const CONTACT_QUESTION: &str = "How do I contact you?";
pub const SITE_CONTEXT: &str = "Site is MediCare Plus.";

pub fn contact_request() -> ChatRequest {
    ChatRequest {
        message: CONTACT_QUESTION.to_string(),
        context: SITE_CONTEXT.to_string(),
    }
}

pub fn contact_body() -> Value {
    json!({"message": CONTACT_QUESTION, "context": SITE_CONTEXT})
}

pub fn candidate_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 40,
            "totalTokenCount": 160
        },
        "modelVersion": "gemini-2.0-flash"
    })
}

pub fn markdown_contact_answer() -> Value {
    candidate_response(
        "To contact us, please visit our [Contact Page](contact.html). \
         Please consult a healthcare professional for personalized advice.",
    )
}

pub fn html_contact_answer() -> Value {
    candidate_response(
        "To contact us, please visit our <a href='contact.html'>Contact Page</a>.",
    )
}

pub fn blocked_prompt_response() -> Value {
    json!({
        "promptFeedback": {"blockReason": "SAFETY"},
        "usageMetadata": {"promptTokenCount": 12}
    })
}

pub fn upstream_error_body(code: u16, status: &str, message: &str) -> Value {
    json!({"error": {"code": code, "message": message, "status": status}})
}
