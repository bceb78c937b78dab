use crate::core::gateway::ModelGateway;
use crate::core::{CompletionProvider, NumerologyResult};
use crate::prompts;
use crate::utils::error::Result;
use deunicode::deunicode;

pub const DEFAULT_MAX_ANALYSIS_LENGTH: usize = 1000;

/// Digit-sum numerology from a name and a date of birth. Pure and
/// deterministic; malformed input degrades to zero contributions rather
/// than erroring.
pub fn calculate(name: &str, dob: &str) -> NumerologyResult {
    let normalized: String = deunicode(name)
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let name_sum: u32 = normalized
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .map(|c| c as u32 - 64)
        .sum();

    let dob_sum: u32 = dob.chars().filter_map(|c| c.to_digit(10)).sum();

    // Fold to a single digit. Master numbers (11/22) are deliberately not
    // special-cased.
    let mut total = name_sum + dob_sum;
    while total > 9 {
        total = digit_sum(total);
    }

    NumerologyResult {
        name_numerology: name_sum,
        dob_numerology: dob_sum,
        personal_numerology: total,
    }
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Numerology interpretation service: deterministic calculation plus a
/// model-written narrative. Without a working model there is no numerology
/// content, so exhaustion surfaces to the caller.
pub struct NumerologyReader<P: CompletionProvider> {
    gateway: ModelGateway<P>,
    max_analysis_length: usize,
}

impl<P: CompletionProvider> NumerologyReader<P> {
    pub fn new(gateway: ModelGateway<P>) -> Self {
        Self {
            gateway,
            max_analysis_length: DEFAULT_MAX_ANALYSIS_LENGTH,
        }
    }

    pub fn with_max_analysis_length(mut self, max_analysis_length: usize) -> Self {
        self.max_analysis_length = max_analysis_length;
        self
    }

    pub async fn analyze(&self, name: &str, dob: &str, question: &str) -> Result<String> {
        let numerology = calculate(name, dob);
        tracing::debug!(
            "Numerology for {}: name={} dob={} personal={}",
            name,
            numerology.name_numerology,
            numerology.dob_numerology,
            numerology.personal_numerology
        );

        let user_payload = serde_json::to_string(&serde_json::json!({
            "name": name,
            "dob": dob,
            "question": question,
            "numerology": numerology,
        }))?;

        let system_prompt = prompts::numerology_system_prompt(self.max_analysis_length);
        self.gateway.complete_text(&system_prompt, &user_payload).await
    }
}
