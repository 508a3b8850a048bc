pub mod llm_service;
pub mod prompt_builder;
pub mod text_extractor;

pub use llm_service::{CompletionChoice, CompletionClient, LlmService};
pub use prompt_builder::build_prompt;
pub use text_extractor::{PdfTextExtractor, TextExtractor};
