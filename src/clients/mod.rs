pub mod gemini;

pub use gemini::{
    ChatTurn, DocumentPart, GeminiClient, GenerationRequest, GenerativeClient, TurnRole,
};
