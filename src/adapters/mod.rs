// Adapters layer: concrete implementations of the domain ports for external
// systems (LLM endpoint, card files on disk).

pub mod cards;
pub mod openai;
