//! User interaction: overwrite confirmation and configuration questions.

use crate::error::Result;
use dialoguer::Input;

/// Checks a typed answer; `Err` carries the message shown before asking again.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Interactive collaborator asked before existing output is replaced and,
/// in interactive mode, for every configuration value.
pub trait Prompter {
    /// Asks a yes/no question.
    ///
    /// # Arguments
    /// * `skip` - Treat the question as answered affirmatively without asking
    /// * `prompt` - Question shown to the user
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;

    /// Asks for a free-text value until `validate` accepts it.
    /// An empty answer takes `default`.
    fn text(&self, prompt: String, default: String, validate: Validator<'_>) -> Result<String>;
}

/// Returns true only for an explicit `y` or `yes`, in any case.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Terminal prompter backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        let answer: String = Input::new()
            .with_prompt(format!("{prompt} (y/N)"))
            .allow_empty(true)
            .interact_text()?;
        Ok(is_affirmative(&answer))
    }

    fn text(&self, prompt: String, default: String, validate: Validator<'_>) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .default(default)
            .validate_with(|input: &String| validate(input.as_str()))
            .interact_text()?;
        Ok(answer.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_skip_confirms_without_asking() {
        assert!(DialoguerPrompter::new().confirm(true, "Overwrite?".to_string()).unwrap());
    }
}
