use serde::Deserialize;

/// Optional filter dimensions accepted by `/query`.
///
/// All supplied dimensions must match (logical AND). A missing or empty value
/// imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    /// Free text matched token-by-token against the name and alternate names.
    pub name: Option<String>,
    pub status: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub tag: Option<String>,
}

/// Treat empty strings the same as an absent parameter.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
