use crate::core::gateway::ModelGateway;
use crate::core::{CompletionProvider, Interpretation, Position, Reading, ReadingRequest};
use crate::domain::model::TarotLlmResponse;
use crate::domain::ports::ResponseSchema;
use crate::prompts;
use crate::utils::error::Result;

/// Composes one tarot reading: three card labels into one structured model
/// call, the four response fields back out as positioned interpretations
/// plus a summary. Stateless, single pass, no retry of its own.
pub struct TarotReader<P: CompletionProvider> {
    gateway: ModelGateway<P>,
}

impl<P: CompletionProvider> TarotReader<P> {
    pub fn new(gateway: ModelGateway<P>) -> Self {
        Self { gateway }
    }

    pub async fn generate_reading(&self, request: &ReadingRequest) -> Result<Reading> {
        let user_payload = serde_json::to_string(&serde_json::json!({
            "name": request.name,
            "question": request.question,
            "past_card_name": request.past_card.full_card_name(),
            "present_card_name": request.present_card.full_card_name(),
            "future_card_name": request.future_card.full_card_name(),
        }))?;

        let schema = ResponseSchema::for_type::<TarotLlmResponse>("TarotLlmResponse")?;
        let answer: TarotLlmResponse = self
            .gateway
            .complete_structured(prompts::TAROT_SYSTEM_PROMPT, &user_payload, &schema)
            .await?;

        let interpretations = [
            Interpretation {
                card_name: request.past_card.name.clone(),
                position: Position::Past,
                orientation: request.past_card.orientation(),
                meaning: format!("Past influence: {}", answer.past),
            },
            Interpretation {
                card_name: request.present_card.name.clone(),
                position: Position::Present,
                orientation: request.present_card.orientation(),
                meaning: format!("Present situation: {}", answer.present),
            },
            Interpretation {
                card_name: request.future_card.name.clone(),
                position: Position::Future,
                orientation: request.future_card.orientation(),
                meaning: format!("Future outlook: {}", answer.future),
            },
        ];

        Ok(Reading {
            interpretations,
            summary: answer.summary,
        })
    }
}
