mod error;
pub mod models;
mod server;
pub mod services;
pub mod state;
mod validation;

pub use error::{ApiError, INTERNAL_FAILURE_MESSAGE};
pub use server::{router, run};
pub use validation::{ContentId, IdentifierError, MAX_IDENTIFIER_LEN};
