//! Typed contract templates and their instantiation.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use tracing::debug;

use super::render::{TemplateError, find_placeholder, placeholder_names, render_template};
use crate::fields::{CanonicalFieldSet, VisibilityModes};

/// Immutable contract source with its declared placeholder set.
#[derive(Debug, Clone)]
pub struct ContractTemplate {
    name: &'static str,
    text: &'static str,
    placeholders: BTreeSet<String>,
}

impl ContractTemplate {
    /// Wrap template text, extracting the placeholders it declares.
    pub fn new(name: &'static str, text: &'static str) -> Self {
        Self {
            name,
            text,
            placeholders: placeholder_names(text),
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Every placeholder name that must be supplied to instantiate.
    pub fn placeholders(&self) -> &BTreeSet<String> {
        &self.placeholders
    }

    /// Substitute canonical values and visibility keywords into a copy of the text.
    ///
    /// Fails if a declared placeholder has no value, if a name is supplied
    /// twice, or if the result still contains a `%name%` token.
    pub fn instantiate(
        &self,
        fields: &CanonicalFieldSet,
        visibility: &VisibilityModes,
    ) -> Result<GeneratedSource, TemplateError> {
        let mut variables: HashMap<String, String> = fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        for (token, mode) in visibility.iter() {
            if variables
                .insert(token.to_string(), mode.keyword().to_string())
                .is_some()
            {
                return Err(TemplateError::AmbiguousPlaceholder {
                    name: token.to_string(),
                });
            }
        }

        if let Some(missing) = self
            .placeholders
            .iter()
            .find(|name| !variables.contains_key(name.as_str()))
        {
            return Err(TemplateError::MissingPlaceholder {
                name: missing.clone(),
            });
        }

        let text = render_template(self.text, &variables)?;

        if let Some((name, position)) = find_placeholder(&text) {
            return Err(TemplateError::StrayPlaceholder { name, position });
        }

        debug!(
            template = self.name,
            placeholders = self.placeholders.len(),
            bytes = text.len(),
            "instantiated contract template"
        );

        Ok(GeneratedSource(text))
    }
}

/// Fully substituted contract source, free of placeholder tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource(String);

impl GeneratedSource {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
