use crate::config::PairingPolicy;
use crate::error::{SpecflowError, SpecflowResult};
use std::collections::BTreeMap;
use tracing::warn;

//==============================================================================
// Request dialects
//==============================================================================

/// Request-body template style, selected by the request sheet's A1 keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    /// `{` ... `}` block of `key: string` template rows
    Json,
    /// Start-tag / end-tag column pairs
    Xml,
}

impl RequestType {
    pub const ALL: [RequestType; 2] = [RequestType::Json, RequestType::Xml];

    /// Keyword expected in cell A1 of the request sheet
    pub fn keyword(self) -> &'static str {
        match self {
            RequestType::Json => "Json",
            RequestType::Xml => "XMLTagNamesStart",
        }
    }

    /// Dialect name used in rendered steps
    pub fn label(self) -> &'static str {
        match self {
            RequestType::Json => "json",
            RequestType::Xml => "xml",
        }
    }

    /// Exact, case-sensitive keyword match
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.keyword() == keyword)
    }
}

//==============================================================================
// Parameters
//==============================================================================

/// Key-value table read from the trailing columns of a master row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    entries: BTreeMap<String, String>,
}

impl ParameterMap {
    pub const REQUEST_SHEET: &'static str = "RequestSheet";
    pub const VALIDATION_SHEET: &'static str = "ValidationSheet";
    pub const URL: &'static str = "URL";
    pub const REQUEST_HEADER: &'static str = "RequestHeader";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up a parameter that must be present
    pub fn require(&self, key: &str) -> SpecflowResult<&str> {
        self.get(key)
            .ok_or_else(|| SpecflowError::Content(format!("Missing required parameter '{}'", key)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

//==============================================================================
// Scenario columns
//==============================================================================

/// One request-sheet column: scenario name and rendered body block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEntry {
    pub name: String,
    pub body: String,
}

/// One expected value: expression text and the value it should hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    pub expression: String,
    pub value: String,
}

impl Assertion {
    pub fn new(expression: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            value: value.into(),
        }
    }
}

/// One validation-sheet column: scenario name and its ordered assertions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub name: String,
    pub assertions: Vec<Assertion>,
}

/// Inputs and outputs of one case, paired by column position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioPairs {
    pairs: Vec<(InputEntry, OutputEntry)>,
}

impl ScenarioPairs {
    pub fn pair(
        inputs: Vec<InputEntry>,
        outputs: Vec<OutputEntry>,
        policy: PairingPolicy,
    ) -> SpecflowResult<Self> {
        if inputs.len() != outputs.len() {
            match policy {
                PairingPolicy::Strict => {
                    return Err(SpecflowError::Content(format!(
                        "Request sheet has {} scenario columns but validation sheet has {}",
                        inputs.len(),
                        outputs.len()
                    )));
                }
                PairingPolicy::Truncate => {
                    warn!(
                        inputs = inputs.len(),
                        outputs = outputs.len(),
                        "scenario column counts differ, extra columns ignored"
                    );
                }
            }
        }

        Ok(Self {
            pairs: inputs.into_iter().zip(outputs).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InputEntry, &OutputEntry)> {
        self.pairs.iter().map(|(input, output)| (input, output))
    }

    pub fn inputs(&self) -> impl Iterator<Item = &InputEntry> {
        self.pairs.iter().map(|(input, _)| input)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &OutputEntry> {
        self.pairs.iter().map(|(_, output)| output)
    }
}

//==============================================================================
// Test case
//==============================================================================

/// Everything parsed for one master-sheet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub request_type: RequestType,
    pub parameters: ParameterMap,
    pub scenarios: ScenarioPairs,
}
