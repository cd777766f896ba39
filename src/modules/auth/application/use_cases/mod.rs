pub mod delete_account;
pub mod fetch_profile;
pub mod login_account;
pub mod logout_account;
pub mod refresh_session;
pub mod register_account;
