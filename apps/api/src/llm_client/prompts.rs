// Prompt templating shared by every service that calls the model.
// Each service keeps its own template constants in its own prompts.rs.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Missing variable '{0}' for prompt template")]
    MissingVariable(&'static str),
}

/// A prompt string with `{name}` placeholders.
///
/// Only names listed in `input_variables` are substituted; any other braces in
/// the template (e.g. a JSON example) are left untouched.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub template: &'static str,
    pub input_variables: &'static [&'static str],
}

impl PromptTemplate {
    pub const fn new(template: &'static str, input_variables: &'static [&'static str]) -> Self {
        Self {
            template,
            input_variables,
        }
    }

    /// Fills every placeholder in a single pass, so substituted values are never
    /// themselves scanned for placeholders.
    pub fn format(&self, values: &HashMap<&str, String>) -> Result<String, TemplateError> {
        if let Some(missing) = self
            .input_variables
            .iter()
            .find(|name| !values.contains_key(**name))
        {
            return Err(TemplateError::MissingVariable(*missing));
        }

        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let replacement = after.find('}').and_then(|close| {
                let name = &after[..close];
                self.input_variables
                    .iter()
                    .any(|v| *v == name)
                    .then(|| (close, &values[name]))
            });

            match replacement {
                Some((close, value)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);

        Ok(out)
    }
}
