use crate::query::encode_global_id;
use crate::SearchError;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://www.ratemyprofessors.com/graphql";

/// Static basic-auth credential the public API accepts.
pub const DEFAULT_AUTHORIZATION: &str = "Basic dGVzdDp0ZXN0";

/// Global id of the default institution (`School-1074`).
pub const DEFAULT_SCHOOL_ID: &str = "U2Nob29sLTEwNzQ=";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub authorization: String,
    pub school_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            authorization: DEFAULT_AUTHORIZATION.to_string(),
            school_id: DEFAULT_SCHOOL_ID.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(
        endpoint: &str,
        authorization: impl Into<String>,
        school_id: impl Into<String>,
    ) -> Result<Self, SearchError> {
        let endpoint = Url::parse(endpoint.trim())?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SearchError::InvalidConfig(format!(
                "unsupported endpoint scheme: {}",
                endpoint.scheme()
            )));
        }

        Ok(Self {
            endpoint: endpoint.to_string(),
            authorization: authorization.into(),
            school_id: school_id.into(),
        })
    }

    /// Replaces the institution with the one identified by its numeric id.
    pub fn with_school_legacy_id(mut self, legacy_id: u64) -> Self {
        self.school_id = encode_global_id("School", &legacy_id.to_string());
        self
    }
}
