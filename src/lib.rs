pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod prompts;
pub mod utils;

pub use adapters::cards::CardDirectory;
pub use adapters::openai::OpenAiClient;
pub use config::AppConfig;
pub use core::catalog::CardCatalog;
pub use core::deck::TarotDeck;
pub use core::gateway::ModelGateway;
pub use core::numerology::NumerologyReader;
pub use core::reading::TarotReader;
pub use utils::error::{Result, TarotError};
