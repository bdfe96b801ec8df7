use kestrel::Severity;
use serde::Deserialize;

const START_MARKER: &str = "/*---";
const END_MARKER: &str = "---*/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedSeverity {
    Fatal,
    Recoverable,
}

impl ExpectedSeverity {
    pub fn matches(self, severity: Severity) -> bool {
        matches!(
            (self, severity),
            (Self::Fatal, Severity::Fatal) | (Self::Recoverable, Severity::Recoverable)
        )
    }
}

/// A case that must produce a diagnostic.
#[derive(Debug, Clone, Deserialize)]
pub struct Negative {
    pub severity: ExpectedSeverity,
    /// Matched against the variant name or the message of the diagnostic.
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flag {
    Skip,
    NoDocs,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseMetadata {
    #[serde(default)]
    pub negative: Option<Negative>,
    /// Expected number of tokens.
    #[serde(default)]
    pub tokens: Option<usize>,
    #[serde(default)]
    pub flags: Vec<Flag>,
}

impl CaseMetadata {
    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }
}

/// Read the YAML block from a leading `/*--- ... ---*/` comment. Files
/// without one get default metadata.
pub fn parse_frontmatter(source: &str) -> Result<CaseMetadata, String> {
    let Some(rest) = source.trim_start().strip_prefix(START_MARKER) else {
        return Ok(CaseMetadata::default());
    };
    let end = rest
        .find(END_MARKER)
        .ok_or_else(|| "front matter is not closed with `---*/`".to_string())?;
    let yaml = &rest[..end];
    if yaml.trim().is_empty() {
        return Ok(CaseMetadata::default());
    }
    serde_yaml::from_str(yaml).map_err(|err| format!("invalid front matter: {err}"))
}
