use crate::normalize::normalize;
use crate::query::QueryBuilder;
use crate::transport::{ensure_no_errors, GraphqlTransport, HttpTransport};
use crate::{ClientConfig, ProfessorRecord, SearchError};
use tracing::{info, warn};

pub struct ProfessorSearch<T>
where
    T: GraphqlTransport,
{
    transport: T,
    builder: QueryBuilder,
}

impl ProfessorSearch<HttpTransport> {
    pub fn from_config(config: &ClientConfig) -> Result<Self, SearchError> {
        Self::new(HttpTransport::new(config), config)
    }
}

impl<T> ProfessorSearch<T>
where
    T: GraphqlTransport + Send + Sync,
{
    pub fn new(transport: T, config: &ClientConfig) -> Result<Self, SearchError> {
        Ok(Self {
            transport,
            builder: QueryBuilder::new(config.school_id.clone())?,
        })
    }

    /// Runs one search. An empty list is a successful "no results" outcome.
    pub async fn search(&self, text: &str) -> Result<Vec<ProfessorRecord>, SearchError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SearchError::EmptyInput);
        }

        let built = self.builder.build(text);
        info!(query = %text, mode = ?built.mode, "searching professors");

        let body = self.transport.execute(&built.request).await?;
        let body = ensure_no_errors(body).map_err(|error| {
            warn!(query = %text, error = %error, "service rejected search");
            error
        })?;

        let professors = normalize(built.mode, &body);
        info!(query = %text, result_count = professors.len(), "search finished");
        Ok(professors)
    }
}
