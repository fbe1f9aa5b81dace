use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One university in the reference dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct University {
    pub name: String,
    pub country: String,
    /// Primary web domain, when known
    pub domain: Option<String>,
}

impl University {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            domain: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}
