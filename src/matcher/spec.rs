use serde::{Deserialize, Serialize};

/// One route pattern or an ordered list of alternatives.
///
/// Alternatives are tried in list order and the first match wins; there is no
/// specificity ranking. An empty list never matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    One(String),
    Any(Vec<String>),
}

impl PathSpec {
    pub fn patterns(&self) -> &[String] {
        match self {
            PathSpec::One(pattern) => std::slice::from_ref(pattern),
            PathSpec::Any(patterns) => patterns,
        }
    }
}

impl From<&str> for PathSpec {
    fn from(value: &str) -> Self {
        PathSpec::One(value.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(value: String) -> Self {
        PathSpec::One(value)
    }
}

impl From<Vec<String>> for PathSpec {
    fn from(value: Vec<String>) -> Self {
        PathSpec::Any(value)
    }
}

impl From<&[&str]> for PathSpec {
    fn from(value: &[&str]) -> Self {
        PathSpec::Any(value.iter().map(|p| p.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathSpec {
    fn from(value: [&str; N]) -> Self {
        PathSpec::Any(value.iter().map(|p| p.to_string()).collect())
    }
}
