mod login;
pub use login::Login;

mod admin;
pub use admin::Admin;
