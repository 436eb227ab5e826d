// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini `generateContent` API request/response types.
//!
//! The wire format uses camelCase keys; responses are decoded tolerantly
//! (missing candidates, parts, or usage metadata default to empty) so a
//! thin reply never fails envelope parsing.

use serde::{Deserialize, Serialize};

// --- Request types ---

/// A request to the Gemini `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns. Roadmap generation always sends a single user turn.
    pub contents: Vec<Content>,

    /// Generation parameters.
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Creates a single-turn user request for the given prompt.
    pub fn user_prompt(text: &str, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }],
            generation_config: GenerationConfig { max_output_tokens },
        }
    }
}

/// Generation parameters for a request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Maximum tokens to generate in the response.
    pub max_output_tokens: u32,
}

/// One conversation turn -- used in both requests and response candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Turn role: "user" in requests, "model" in responses.
    #[serde(default)]
    pub role: String,

    /// Content parts. Only text parts are produced or consumed here;
    /// anything else deserializes to an empty text part.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text payload of the part.
    #[serde(default)]
    pub text: String,
}

// --- Response types ---

/// A full response from the Gemini `generateContent` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates. The API returns one unless asked otherwise.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Token accounting for the request.
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    ///
    /// Returns an empty string when the response carries no candidates or
    /// no parts -- downstream parsing owns the empty-output case.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content. Absent when generation was blocked.
    #[serde(default)]
    pub content: Option<Content>,

    /// Why generation stopped (e.g., "STOP", "MAX_TOKENS", "SAFETY").
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics from the API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens consumed by the prompt.
    #[serde(default)]
    pub prompt_token_count: u32,

    /// Tokens generated across all candidates.
    #[serde(default)]
    pub candidates_token_count: u32,

    /// Total tokens billed for the request.
    #[serde(default)]
    pub total_token_count: u32,
}

// --- Error types ---

/// API error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// HTTP-like numeric code (e.g., 429).
    #[serde(default)]
    pub code: i32,
    /// Human-readable error message.
    pub message: String,
    /// Canonical status string (e.g., "RESOURCE_EXHAUSTED").
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_request_uses_camel_case() {
        let req = GenerateContentRequest::user_prompt("Build me a roadmap", 8192);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Build me a roadmap");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 8192);
        assert!(json.get("generation_config").is_none());
    }

    #[test]
    fn deserialize_response_with_text() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "{\"status\":\"active\"}"}], "role": "model"},
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 80, "totalTokenCount": 200},
            "modelVersion": "gemini-flash-latest"
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.text(), "{\"status\":\"active\"}");
        assert_eq!(resp.candidates[0].finish_reason.as_deref(), Some("STOP"));
        let usage = resp.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, 120);
        assert_eq!(usage.total_token_count, 200);
    }

    #[test]
    fn text_joins_multiple_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "{\"status\":"}, {"text": "\"active\"}"}], "role": "model"}
            }]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.text(), "{\"status\":\"active\"}");
    }

    #[test]
    fn text_is_empty_without_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.candidates.is_empty());
        assert_eq!(resp.text(), "");
    }

    #[test]
    fn text_is_empty_when_candidate_has_no_content() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.text(), "");
        assert_eq!(resp.candidates[0].finish_reason.as_deref(), Some("SAFETY"));
    }

    #[test]
    fn deserialize_usage_defaults_to_zero() {
        let usage: UsageMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(usage.prompt_token_count, 0);
        assert_eq!(usage.candidates_token_count, 0);
        assert_eq!(usage.total_token_count, 0);
    }

    #[test]
    fn deserialize_api_error_body() {
        let json = r#"{
            "error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED"
            }
        }"#;
        let err: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.code, 429);
        assert_eq!(err.error.status, "RESOURCE_EXHAUSTED");
        assert!(err.error.message.contains("exhausted"));
    }
}
