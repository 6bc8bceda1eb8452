//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Schema-constrained generative backends
//! - `PresentationSchemaValidator` - Presentation document validation
//! - `SynthesisGateway` - Session-side access to the synthesis service

mod ai_provider;
mod schema_validator;
mod synthesis_gateway;

pub use ai_provider::{
    AIError, AIProvider, FinishReason, Message, MessageRole, ProviderInfo, StructuredRequest,
    StructuredResponse, TokenUsage,
};
pub use schema_validator::{GeneratedDeck, PresentationSchemaValidator, SchemaViolation};
pub use synthesis_gateway::{GatewayError, SynthesisGateway};
