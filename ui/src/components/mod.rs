pub mod layout;
pub mod login_form;
pub mod recipe_card;
pub mod require_auth;
pub mod toast;

pub use layout::Header;
pub use login_form::LoginForm;
pub use recipe_card::RecipeCard;
pub use require_auth::RequireAuth;
pub use toast::ToastContainer;
