pub mod account;
pub mod account_id;
pub mod display_name;
pub mod email;
pub mod login_id;
pub mod password;
pub mod username;
pub mod validation;
