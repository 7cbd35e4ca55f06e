//! AI Integration Layer
//!
//! LLM providers and the timeout wrapper every pillar agent calls through.

pub mod provider;
pub mod timeout;

pub use provider::{
    CompletionRequest, LlmProvider, LlmResponse, OllamaProvider, OpenAiProvider, ProviderConfig,
    ResponseMetadata, ResponseTiming, SharedProvider, TokenUsage, create_provider,
};
pub use timeout::with_timeout;
