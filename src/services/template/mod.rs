//! Template rendering service

pub mod engine;
pub mod prompts;

pub use engine::TemplateEngine;
pub use prompts::render_system_prompt;
