pub mod bands;
pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod models;
pub mod normalize;
pub mod query;
pub mod session;
pub mod transport;

pub use bands::{difficulty_tone, format_score, format_would_take_again, rating_tone, Tone};
pub use client::ProfessorSearch;
pub use config::{ClientConfig, DEFAULT_AUTHORIZATION, DEFAULT_ENDPOINT, DEFAULT_SCHOOL_ID};
pub use driver::SearchDriver;
pub use error::SearchError;
pub use models::{ProfessorRecord, QueryMode, ReviewRecord};
pub use normalize::normalize;
pub use query::{decode_global_id, encode_global_id, BuiltQuery, GraphqlRequest, QueryBuilder};
pub use session::{update, Effect, SearchEvent, SearchOutcome, SearchState, SearchStatus, Ticket};
pub use transport::{ensure_no_errors, GraphqlTransport, HttpTransport};
