use crate::core::{CompletionProvider, CompletionRequest, ResponseSchema};
use crate::utils::error::{Result, TarotError};
use serde::de::DeserializeOwned;

/// Ordered fallback over a list of candidate models behind one
/// [`CompletionProvider`]. Each model gets exactly one attempt, in list
/// order; the first success wins. No backoff, no circuit breaker, no
/// per-model timeout beyond the transport default.
pub struct ModelGateway<P: CompletionProvider> {
    provider: P,
    models: Vec<String>,
}

impl<P: CompletionProvider> ModelGateway<P> {
    pub fn new(provider: P, models: Vec<String>) -> Self {
        Self { provider, models }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Free-text completion: any non-empty response from the first model
    /// that answers.
    pub async fn complete_text(&self, system_prompt: &str, user_payload: &str) -> Result<String> {
        self.attempt_each(system_prompt, user_payload, None, |raw| Ok(raw.to_string()))
            .await
    }

    /// Structured completion: the raw response must parse into `T`. A parse
    /// failure counts as a failed attempt and the next model is tried.
    pub async fn complete_structured<T: DeserializeOwned>(
        &self,
        system_prompt: &str,
        user_payload: &str,
        schema: &ResponseSchema,
    ) -> Result<T> {
        self.attempt_each(system_prompt, user_payload, Some(schema), parse_structured)
            .await
    }

    async fn attempt_each<T, F>(
        &self,
        system_prompt: &str,
        user_payload: &str,
        schema: Option<&ResponseSchema>,
        parse: F,
    ) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        let mut last_error = String::from("no models configured");

        for model in &self.models {
            let attempt = self
                .provider
                .try_complete(CompletionRequest {
                    model,
                    system_prompt,
                    user_payload,
                    response_schema: schema,
                })
                .await
                .and_then(|raw| parse(&raw));

            match attempt {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::error!("Model {} failed: {}", model, e);
                    last_error = format!("{}: {}", model, e);
                    if model != self.models.last().unwrap() {
                        tracing::info!("Switching to next model");
                    }
                }
            }
        }

        Err(TarotError::AllProvidersExhausted { last_error })
    }
}

/// Parse the outermost JSON object out of raw model text and deserialize it
/// strictly. Models sometimes wrap their JSON in prose or code fences, so the
/// object is located by brace positions rather than parsed verbatim.
fn parse_structured<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let json_str = extract_json_object(raw).ok_or_else(|| TarotError::SchemaValidationError {
        message: "no JSON object found in model output".to_string(),
    })?;

    serde_json::from_str(json_str).map_err(|e| TarotError::SchemaValidationError {
        message: e.to_string(),
    })
}

fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}
