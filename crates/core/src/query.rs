use crate::{QueryMode, SearchError};
use base64::{engine::general_purpose::STANDARD, Engine};
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Value};

/// Number of reviews requested per professor.
pub const REVIEW_PAGE_SIZE: usize = 5;

const TEACHER_TYPE: &str = "Teacher";

pub const TEACHER_BY_ID_QUERY: &str = r#"
    query TeacherByIdQuery($id: ID!) {
      node(id: $id) {
        ... on Teacher {
          id
          legacyId
          firstName
          lastName
          department
          school {
            name
          }
          avgRating
          avgDifficulty
          wouldTakeAgainPercent
          numRatings
          ratings(first: 5) {
            edges {
              node {
                class
                comment
                wouldTakeAgain
                difficultyRating
                helpfulRating
                clarityRating
                date
              }
            }
          }
        }
      }
    }
"#;

pub const SEARCH_TEACHERS_QUERY: &str = r#"
    query NewSearchTeachersQuery($text: String!, $schoolID: ID!) {
      newSearch {
        teachers(query: {text: $text, schoolID: $schoolID}) {
          edges {
            node {
              id
              legacyId
              firstName
              lastName
              department
              avgRating
              avgDifficulty
              wouldTakeAgainPercent
              numRatings
              ratings(first: 5) {
                edges {
                  node {
                    class
                    comment
                    wouldTakeAgain
                    difficultyRating
                    helpfulRating
                    clarityRating
                    date
                  }
                }
              }
            }
          }
        }
      }
    }
"#;

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub mode: QueryMode,
    pub request: GraphqlRequest,
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    identifier_pattern: Regex,
    school_id: String,
}

impl QueryBuilder {
    pub fn new(school_id: impl Into<String>) -> Result<Self, SearchError> {
        Ok(Self {
            identifier_pattern: Regex::new(r"^[0-9]+$")?,
            school_id: school_id.into(),
        })
    }

    pub fn mode_for(&self, input: &str) -> QueryMode {
        if self.identifier_pattern.is_match(input.trim()) {
            QueryMode::ByIdentifier
        } else {
            QueryMode::ByName
        }
    }

    /// Builds the request for a non-empty search string. Blank input must be
    /// rejected by the caller before this point.
    pub fn build(&self, input: &str) -> BuiltQuery {
        let text = input.trim();
        let mode = self.mode_for(text);

        let request = match mode {
            QueryMode::ByIdentifier => GraphqlRequest {
                query: TEACHER_BY_ID_QUERY.to_string(),
                variables: json!({ "id": encode_global_id(TEACHER_TYPE, text) }),
            },
            QueryMode::ByName => GraphqlRequest {
                query: SEARCH_TEACHERS_QUERY.to_string(),
                variables: json!({ "text": text, "schoolID": self.school_id }),
            },
        };

        BuiltQuery { mode, request }
    }
}

/// Encodes `<type_name>-<id>` the way the API forms its global object ids.
pub fn encode_global_id(type_name: &str, id: &str) -> String {
    STANDARD.encode(format!("{type_name}-{id}"))
}

/// Splits a global id back into its type name and raw id.
pub fn decode_global_id(token: &str) -> Result<(String, String), SearchError> {
    let bytes = STANDARD
        .decode(token.trim())
        .map_err(|error| SearchError::InvalidGlobalId(format!("{token}: {error}")))?;
    let decoded = String::from_utf8(bytes)
        .map_err(|error| SearchError::InvalidGlobalId(format!("{token}: {error}")))?;

    match decoded.split_once('-') {
        Some((type_name, id)) if !type_name.is_empty() => {
            Ok((type_name.to_string(), id.to_string()))
        }
        _ => Err(SearchError::InvalidGlobalId(decoded)),
    }
}
