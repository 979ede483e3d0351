//! Axum route handlers.
//!
//! Each handler extracts request data, hands it to the matching use case, and
//! maps the result onto a response. Handlers stay thin; the session rules
//! live in the use cases.

pub mod change_password;
pub mod error;
pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod register;

pub use change_password::change_password;
pub use error::{ErrorResponse, SessionApiError};
pub use login::login;
pub use logout::logout;
pub use me::me;
pub use refresh::refresh;
pub use register::register;
