pub mod session;
pub mod use_cases;

pub use session::{AuthenticatedSession, SessionTokens};
pub use use_cases::{
    authorize::{AuthorizeError, AuthorizeUseCase},
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    login::{LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    refresh_session::{RefreshError, RefreshSessionUseCase},
    register::{NewRegistration, RegisterError, RegisterUseCase},
};

#[cfg(test)]
pub(crate) mod test_support;
