use std::fs;
use std::path::Path;

use miette::NamedSource;

use crate::errors::KestrelError;

/// An immutable source buffer with the name diagnostics refer to it by.
#[derive(Debug, Clone)]
pub struct Source {
    name: String,
    text: String,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, KestrelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| KestrelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(path.display().to_string(), text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// A copy miette can render snippets from.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.text.clone())
    }
}
