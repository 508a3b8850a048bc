pub mod deck_ctx;
pub mod deck_flow;

pub use deck_ctx::DeckCtx;
pub use deck_flow::DeckFlow;
