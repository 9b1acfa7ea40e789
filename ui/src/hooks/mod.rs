pub mod use_authentication;
pub mod use_logout;
pub mod use_require_auth;
pub mod use_stores;

pub use use_authentication::use_authentication;
pub use use_logout::use_logout;
pub use use_require_auth::use_require_auth;
pub use use_stores::use_stores;
