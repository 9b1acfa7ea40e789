pub mod category;
pub mod favorites;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod recipe;

pub use category::CategoryPage;
pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use recipe::RecipePage;
