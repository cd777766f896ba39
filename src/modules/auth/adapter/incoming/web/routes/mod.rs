pub mod delete_account;
pub mod login;
pub mod logout;
pub mod profile;
pub mod refresh;
pub mod register;

pub use delete_account::delete_account_handler;
pub use login::login_handler;
pub use logout::logout_handler;
pub use profile::profile_handler;
pub use refresh::refresh_handler;
pub use register::register_handler;
