use crate::domain::model::CardRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use schemars::JsonSchema;

/// JSON schema the provider is asked to constrain its output to, when the
/// caller expects a structured completion.
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: serde_json::Value,
}

impl ResponseSchema {
    pub fn for_type<T: JsonSchema>(name: &str) -> Result<Self> {
        let schema = serde_json::to_value(schemars::schema_for!(T))?;
        Ok(Self {
            name: name.to_string(),
            schema,
        })
    }
}

/// One completion attempt against one named model.
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub system_prompt: &'a str,
    pub user_payload: &'a str,
    pub response_schema: Option<&'a ResponseSchema>,
}

/// Seam between the gateway's fallback policy and any concrete LLM backend.
/// One attempt in, raw completion text out; the gateway decides what a
/// failure means.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn try_complete(&self, request: CompletionRequest<'_>) -> Result<String>;
}

/// Where card documents come from. The production adapter reads a directory
/// of JSON files; tests supply in-memory sources.
pub trait CardSource: Send + Sync {
    fn load_cards(&self) -> Result<Vec<CardRecord>>;
}
