pub mod errors;
pub mod message;

pub use errors::AppError;
pub use message::{ChatRequest, ChatResponse, ChatTurn, Role, ValidationIssue, WELCOME_TURN_ID};
