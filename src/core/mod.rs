pub mod catalog;
pub mod deck;
pub mod gateway;
pub mod numerology;
pub mod reading;

pub use crate::domain::model::{
    CardRecord, DrawnCard, Interpretation, NumerologyResult, Orientation, Position, Reading,
    ReadingRequest,
};
pub use crate::domain::ports::{CardSource, CompletionProvider, CompletionRequest, ResponseSchema};
pub use crate::utils::error::Result;
