use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled")]
    Cancelled,
    #[error("prompt failed: {0}")]
    Failed(String),
}

/// Interactive input seam. The CLI binds this to a terminal renderer; tests
/// script the answers.
pub trait Prompter {
    /// Free-text prompt. Implementations accept empty input; required fields
    /// are a workflow convention, not a validation rule.
    fn input(&self, label: &str) -> Result<String, PromptError>;

    /// Single-choice prompt over `items`, returning the chosen index.
    fn select(&self, label: &str, items: &[String]) -> Result<usize, PromptError>;
}
