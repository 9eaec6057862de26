//! Text generation capability
//!
//! Participants never produce text themselves. They render a prompt and hand
//! it to a [`Generator`]: a real model backend, a scripted stub, or a test
//! double that fails on purpose. Implementations live wherever the backend
//! lives (see the infrastructure crate); this module only holds the contract
//! and the two generators the domain needs on its own.

use crate::core::error::GenerationError;
use std::sync::Arc;

/// Fixed text returned by [`PlaceholderGenerator`]
pub const PLACEHOLDER_RESPONSE: &str = "Default argument.";

/// Text-in, text-out generation backend
pub trait Generator: Send + Sync {
    /// Produce a response for the rendered prompt
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<G: Generator + ?Sized> Generator for Arc<G> {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}

/// Constant-output stub used when no backend is supplied
///
/// Always answers [`PLACEHOLDER_RESPONSE`]. Its output carries no reasoning;
/// it exists so participants run without any backend configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderGenerator;

impl Generator for PlaceholderGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok(PLACEHOLDER_RESPONSE.to_string())
    }
}

/// Adapter that turns a closure into a [`Generator`]. See [`from_fn`].
#[derive(Clone)]
pub struct FnGenerator<F> {
    f: F,
}

impl<F> Generator for FnGenerator<F>
where
    F: Fn(&str) -> Result<String, GenerationError> + Send + Sync,
{
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (self.f)(prompt)
    }
}

impl<F> std::fmt::Debug for FnGenerator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnGenerator")
    }
}

/// Wrap a closure as a [`Generator`]
///
/// # Example
///
/// ```
/// use debate_domain::participant::generator::{from_fn, Generator};
///
/// let echo = from_fn(|prompt| Ok(prompt.to_uppercase()));
/// assert_eq!(echo.generate("hi").unwrap(), "HI");
/// ```
pub fn from_fn<F>(f: F) -> FnGenerator<F>
where
    F: Fn(&str) -> Result<String, GenerationError> + Send + Sync,
{
    FnGenerator { f }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_ignores_prompt() {
        let generator = PlaceholderGenerator;
        assert_eq!(generator.generate("anything").unwrap(), PLACEHOLDER_RESPONSE);
        assert_eq!(generator.generate("").unwrap(), "Default argument.");
    }

    #[test]
    fn test_from_fn_propagates_error() {
        let failing = from_fn(|_| Err(GenerationError::RequestFailed("boom".to_string())));
        let err = failing.generate("prompt").unwrap_err();
        assert!(matches!(err, GenerationError::RequestFailed(msg) if msg == "boom"));
    }

    #[test]
    fn test_shared_generator_through_arc() {
        let shared: Arc<dyn Generator> = Arc::new(from_fn(|p| Ok(format!("<{p}>"))));
        assert_eq!(shared.generate("x").unwrap(), "<x>");
    }
}
