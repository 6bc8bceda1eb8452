//! SynthesizeHandler - Turn a conversation (and optional current deck) into a new deck.
//!
//! Pipeline: sanitize, compose, invoke, validate. Stateless; every call is
//! self-contained.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;

use crate::domain::presentation::Presentation;
use crate::domain::synthesis::{sanitize, PromptComposer, SynthesisResult};
use crate::ports::{AIProvider, PresentationSchemaValidator};

use super::{GenerationInvoker, GenerationSettings, SynthesisError};

/// Command to synthesize a presentation.
#[derive(Debug, Clone)]
pub struct SynthesizeCommand {
    /// Raw conversation entries as received; sanitized by the handler.
    pub messages: Vec<Value>,
    /// Current deck to edit, if any.
    pub current_presentation: Option<Presentation>,
}

/// Handler for presentation synthesis.
pub struct SynthesizeHandler<P: ?Sized + AIProvider> {
    invoker: GenerationInvoker<P>,
    validator: Arc<dyn PresentationSchemaValidator>,
}

impl<P: ?Sized + AIProvider> SynthesizeHandler<P> {
    pub fn new(
        ai_provider: Arc<P>,
        validator: Arc<dyn PresentationSchemaValidator>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            invoker: GenerationInvoker::new(ai_provider, settings),
            validator,
        }
    }

    /// Runs the pipeline and reports failures as errors.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if no user turn survives sanitization
    /// - any invoker failure
    /// - `SchemaViolation` if the backend output breaks the schema
    /// - `InternalFault` if anything panics
    pub async fn handle(&self, cmd: SynthesizeCommand) -> Result<SynthesisResult, SynthesisError> {
        AssertUnwindSafe(self.run(cmd))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(SynthesisError::internal_fault(panic_message(&*panic))))
    }

    /// Runs the pipeline and always returns an envelope.
    pub async fn synthesize(&self, cmd: SynthesizeCommand) -> SynthesisResult {
        match self.handle(cmd).await {
            Ok(result) => result,
            Err(err) => SynthesisResult::degraded(err),
        }
    }

    async fn run(&self, cmd: SynthesizeCommand) -> Result<SynthesisResult, SynthesisError> {
        let received = cmd.messages.len();
        let turns = sanitize(&cmd.messages);
        tracing::info!(
            received,
            kept = turns.len(),
            editing = cmd.current_presentation.is_some(),
            "Sanitized conversation"
        );

        if turns.is_empty() {
            return Err(self.log_failure(SynthesisError::invalid_request(
                "conversation contains no user messages",
            )));
        }

        let prompt = PromptComposer::compose(turns, cmd.current_presentation.as_ref());

        let raw = self
            .invoker
            .invoke(&prompt, self.validator.output_schema())
            .await
            .map_err(|e| self.log_failure(e))?;

        let deck = self
            .validator
            .validate_generated(&raw)
            .map_err(|e| self.log_failure(SynthesisError::from(e)))?;

        tracing::info!(
            slides = deck.presentation.slide_count(),
            title = %deck.presentation.title(),
            "Synthesized presentation"
        );

        Ok(SynthesisResult::success(deck.message, deck.presentation))
    }

    fn log_failure(&self, err: SynthesisError) -> SynthesisError {
        tracing::warn!(code = err.code(), error = %err, "Synthesis failed");
        err
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic during synthesis".to_string()
    }
}
