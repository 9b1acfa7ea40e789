//! Canned API data and responders for the mock recipe backend.
//!
//! Bodies follow the backend's `{ "success": true, "data": ... }` envelope
//! unless a test needs the bare shape.

use jiff::Timestamp;
use payloads::{
    FavoriteRecipe, Identity, Recipe, RecipeDetails, UserProfile,
    responses::{Category, Ingredient},
};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockGuard, MockServer, ResponseTemplate};

pub const ALICE_TOKEN: &str = "alice-session-token";
pub const ALICE_EMAIL: &str = "alice@example.com";
pub const ALICE_PASSWORD: &str = "supersecret";

pub fn alice_profile() -> UserProfile {
    UserProfile {
        id: "665f1c2e9b1d8a0012345678".into(),
        name: "Alice".into(),
        email: ALICE_EMAIL.into(),
        last_login: Some(timestamp("2025-01-02T09:30:00Z")),
        created_at: Some(timestamp("2024-11-20T18:00:00Z")),
    }
}

pub fn alice_identity(favorites: Vec<FavoriteRecipe>) -> Identity {
    Identity {
        profile: alice_profile(),
        favorite_recipes: favorites,
    }
}

pub fn timestamp(s: &str) -> Timestamp {
    s.parse().expect("invalid fixture timestamp")
}

/// Wrap `data` in the backend's success envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn error_body(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

pub fn auth_body(token: &str, identity: &Identity) -> Value {
    envelope(json!({ "token": token, "user": identity }))
}

pub fn user_body(identity: &Identity) -> Value {
    envelope(json!({ "user": identity }))
}

pub fn recipes_body(recipes: &[Recipe]) -> Value {
    envelope(json!({ "recipes": recipes, "count": recipes.len() }))
}

pub fn recipe_body(recipe: &RecipeDetails) -> Value {
    envelope(json!({ "recipe": recipe }))
}

pub fn favorites_body(favorites: &[FavoriteRecipe]) -> Value {
    envelope(json!({ "favorites": favorites }))
}

pub fn ok_body() -> Value {
    json!({ "success": true })
}

/// A catalog entry in the upstream recipe database's field naming.
pub fn recipe(id: &str, name: &str, category: &str, area: &str) -> Recipe {
    Recipe {
        id: id.into(),
        name: name.into(),
        thumbnail: format!("https://img.example.com/{id}.jpg"),
        category: Some(category.into()),
        area: Some(area.into()),
        instructions: None,
        tags: None,
        youtube: None,
        source: None,
    }
}

pub fn seafood_recipes() -> Vec<Recipe> {
    vec![
        recipe("52959", "Baked salmon with fennel & tomatoes", "Seafood", "British"),
        recipe("52819", "Cajun spiced fish tacos", "Seafood", "Mexican"),
        recipe("53043", "Fish fofos", "Seafood", "Portuguese"),
    ]
}

pub fn dessert_recipes() -> Vec<Recipe> {
    vec![
        recipe("52768", "Apple Frangipan Tart", "Dessert", "British"),
        recipe("52767", "Bakewell tart", "Dessert", "British"),
    ]
}

pub fn categories() -> Vec<Category> {
    ["Beef", "Dessert", "Seafood"]
        .iter()
        .enumerate()
        .map(|(i, name)| Category {
            id: (i + 1).to_string(),
            name: name.to_string(),
            thumbnail: format!("https://img.example.com/{name}.png"),
            description: Some(format!("All about {name}")),
        })
        .collect()
}

pub fn recipe_details(id: &str, name: &str) -> RecipeDetails {
    RecipeDetails {
        id: id.into(),
        name: name.into(),
        category: "Seafood".into(),
        area: "British".into(),
        instructions: "Heat oven.\nBake the fish.".into(),
        image: format!("https://img.example.com/{id}.jpg"),
        tags: vec!["Fish".into()],
        ingredients: vec![
            Ingredient {
                name: "Salmon".into(),
                measurement: "2 fillets".into(),
            },
            Ingredient {
                name: "Fennel".into(),
                measurement: "1".into(),
            },
        ],
        youtube_url: None,
        source_url: None,
    }
}

pub fn favorite(recipe: &Recipe, added_at: &str) -> FavoriteRecipe {
    FavoriteRecipe {
        recipe_id: recipe.id.clone(),
        recipe_name: recipe.name.clone(),
        recipe_image: recipe.thumbnail.clone(),
        category: recipe.category.clone().unwrap_or_default(),
        added_at: timestamp(added_at),
    }
}

/// Answer the next login with `body`, for as long as the guard lives.
pub async fn mount_login(server: &MockServer, body: Value) -> MockGuard {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount_as_scoped(server)
        .await
}
