use serde::{Deserialize, Serialize};

pub const NAME_MAX_LEN: usize = 255;
pub const EMAIL_MAX_LEN: usize = 255;
pub const PASSWORD_MIN_LEN: usize = 6;

/// Validation result for the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidation {
    Valid,
    MissingName,
    NameTooLong,
    InvalidEmail,
    EmailTooLong,
    PasswordTooShort,
}

impl RegistrationValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::MissingName => Some("Name is required"),
            Self::NameTooLong => Some("Name must be at most 255 characters"),
            Self::InvalidEmail => Some("Please enter a valid email address"),
            Self::EmailTooLong => Some("Email must be at most 255 characters"),
            Self::PasswordTooShort => {
                Some("Password must be at least 6 characters")
            }
        }
    }
}

/// Validate registration details before they are sent.
///
/// Rules:
/// - name is not blank and at most 255 characters
/// - email has a local part and a domain, at most 255 characters
/// - password is at least 6 characters
pub fn validate_registration(details: &CreateAccount) -> RegistrationValidation {
    let name = details.name.trim();
    if name.is_empty() {
        return RegistrationValidation::MissingName;
    }
    if name.chars().count() > NAME_MAX_LEN {
        return RegistrationValidation::NameTooLong;
    }

    if details.email.chars().count() > EMAIL_MAX_LEN {
        return RegistrationValidation::EmailTooLong;
    }
    let well_formed =
        details.email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.')
        });
    if !well_formed {
        return RegistrationValidation::InvalidEmail;
    }

    if details.password.chars().count() < PASSWORD_MIN_LEN {
        return RegistrationValidation::PasswordTooShort;
    }

    RegistrationValidation::Valid
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub name: String,
}

/// Body of the add-favorite call. The display fields are stored by the
/// server next to the recipe id so the favorites page can render without
/// a catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavorite {
    pub recipe_id: crate::RecipeId,
    pub recipe_name: String,
    pub recipe_image: String,
    pub category: String,
}

/// Category label used when a recipe summary carries none.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

impl From<&crate::Recipe> for AddFavorite {
    fn from(recipe: &crate::Recipe) -> Self {
        Self {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            recipe_image: recipe.thumbnail.clone(),
            category: recipe
                .category
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
        }
    }
}

impl From<&crate::RecipeDetails> for AddFavorite {
    fn from(recipe: &crate::RecipeDetails) -> Self {
        Self {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            recipe_image: recipe.image.clone(),
            category: Some(recipe.category.clone())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
        }
    }
}
