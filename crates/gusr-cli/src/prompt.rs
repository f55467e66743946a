use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use gusr_core::prompt::{PromptError, Prompter};

/// Terminal prompt renderer backed by dialoguer.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn input(&self, label: &str) -> Result<String, PromptError> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(map_err)
    }

    fn select(&self, label: &str, items: &[String]) -> Result<usize, PromptError> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact()
            .map_err(map_err)
    }
}

fn map_err(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            PromptError::Cancelled
        }
        other => PromptError::Failed(other.to_string()),
    }
}
