use crate::domain::ports::{CompletionProvider, CompletionRequest};
use crate::utils::error::{Result, TarotError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Chat-completions client for any OpenAI-compatible endpoint. One request
/// per attempt; retries and fallback live in the gateway, not here.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'a str,
    schema: &'a serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn try_complete(&self, request: CompletionRequest<'_>) -> Result<String> {
        let body = ChatCompletionBody {
            model: request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: request.user_payload,
                },
            ],
            response_format: request.response_schema.map(|s| ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: &s.name,
                    schema: &s.schema,
                },
            }),
        };

        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!("Requesting completion from {} (model: {})", url, request.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(TarotError::ProviderError {
                message: format!("model {} returned no text", request.model),
            });
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ResponseSchema;
    use httpmock::prelude::*;

    fn chat_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
        })
    }

    #[tokio::test]
    async fn test_try_complete_returns_message_content() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer test-key")
                .json_body_partial(r#"{"model": "gpt-test"}"#);
            then.status(200).json_body(chat_response("The cards speak."));
        });

        let client = OpenAiClient::new(server.url("/v1"), "test-key");
        let result = client
            .try_complete(CompletionRequest {
                model: "gpt-test",
                system_prompt: "system",
                user_payload: "user",
                response_schema: None,
            })
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(result, "The cards speak.");
    }

    #[tokio::test]
    async fn test_try_complete_sends_response_format_when_schema_given() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .json_body_partial(r#"{"response_format": {"type": "json_schema"}}"#);
            then.status(200).json_body(chat_response("{}"));
        });

        let schema = ResponseSchema {
            name: "Shape".to_string(),
            schema: serde_json::json!({"type": "object"}),
        };
        let client = OpenAiClient::new(server.url("/v1"), "test-key");
        client
            .try_complete(CompletionRequest {
                model: "gpt-test",
                system_prompt: "system",
                user_payload: "user",
                response_schema: Some(&schema),
            })
            .await
            .unwrap();

        api_mock.assert();
    }

    #[tokio::test]
    async fn test_try_complete_fails_on_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(500);
        });

        let client = OpenAiClient::new(server.url("/v1"), "test-key");
        let result = client
            .try_complete(CompletionRequest {
                model: "gpt-test",
                system_prompt: "system",
                user_payload: "user",
                response_schema: None,
            })
            .await;

        assert!(matches!(result, Err(TarotError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_try_complete_fails_on_empty_content() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(chat_response("   "));
        });

        let client = OpenAiClient::new(server.url("/v1"), "test-key");
        let result = client
            .try_complete(CompletionRequest {
                model: "gpt-test",
                system_prompt: "system",
                user_payload: "user",
                response_schema: None,
            })
            .await;

        assert!(matches!(result, Err(TarotError::ProviderError { .. })));
    }
}
