//! Scripted generator
//!
//! Replays canned responses in order, wrapping around at the end. Useful for
//! rehearsing a debate layout or pinning a judge's answer without a model.

use debate_domain::{GenerationError, Generator};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Generator that cycles through a fixed list of responses
#[derive(Debug)]
pub struct ScriptedGenerator {
    responses: Vec<String>,
    cursor: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of responses served so far
    pub fn calls(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl Generator for ScriptedGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        if self.responses.is_empty() {
            return Err(GenerationError::Unavailable(
                "scripted generator has no responses".to_string(),
            ));
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.responses.len();
        Ok(self.responses[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responses_cycle_in_order() {
        let generator = ScriptedGenerator::new(["first", "second"]);
        assert_eq!(generator.generate("a").unwrap(), "first");
        assert_eq!(generator.generate("b").unwrap(), "second");
        assert_eq!(generator.generate("c").unwrap(), "first");
        assert_eq!(generator.calls(), 3);
    }

    #[test]
    fn test_empty_script_is_unavailable() {
        let generator = ScriptedGenerator::new(Vec::<String>::new());
        assert!(generator.generate("a").unwrap_err().is_unavailable());
    }
}
