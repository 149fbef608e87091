//! # HTTP API
//!
//! The public surface of the service: five poem endpoints plus a health
//! probe. Handlers validate input in contract order, call the store and
//! shape the response; every failure leaves as the `{msg, status}` envelope.
//!
//! # Endpoints
//!
//! - `GET /poem/{id}` - fetch one poem
//! - `GET /poems` - paginated listing
//! - `POST /poem` - create (secret required)
//! - `PUT /poem/{id}` - update (secret required)
//! - `DELETE /poem/{id}` - delete (secret required)
//! - `GET /health` - liveness probe

mod errors;
mod handlers;
mod pagination;
mod response;
mod routes;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use handlers::{AppState, DeletePoemRequest, WritePoemRequest};
pub use pagination::PageParams;
pub use response::{Poem, PoemList, StatusMessage};
pub use routes::{router, serve, HealthResponse};
