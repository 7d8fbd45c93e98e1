pub mod chat;
pub mod profile;
pub mod quiz_question;
pub mod quiz_session;
pub mod session_context;

pub use chat::{ChatMessage, ChatRole, ChatSession};
pub use profile::{Profile, SmtDetail, Subject, SubjectType, SyllabusData};
pub use quiz_question::QuizQuestion;
pub use quiz_session::QuizSession;
pub use session_context::SessionContext;
