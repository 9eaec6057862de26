//! Prompt domain
//!
//! Templates for rendering the requests sent to generators.

mod template;

pub use template::PromptTemplate;
