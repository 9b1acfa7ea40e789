use payloads::{RecipeId, SessionStorage, requests, storage::TOKEN_KEY};
use reqwest::StatusCode;
use serde_json::json;
use test_helpers::{assert_status_code, mock, spawn_client};
use wiremock::matchers::{bearer_token, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_favorites() -> anyhow::Result<()> {
    let (server, storage, client) = spawn_client().await;
    storage.set(TOKEN_KEY, mock::ALICE_TOKEN);
    let favorites: Vec<_> = mock::seafood_recipes()
        .iter()
        .map(|r| mock::favorite(r, "2025-01-01T12:00:00Z"))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/users/favorites"))
        .and(bearer_token(mock::ALICE_TOKEN))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::favorites_body(&favorites)),
        )
        .mount(&server)
        .await;

    assert_eq!(client.get_favorites().await?, favorites);

    Ok(())
}

#[tokio::test]
async fn add_favorite_posts_display_fields() -> anyhow::Result<()> {
    let (server, storage, client) = spawn_client().await;
    storage.set(TOKEN_KEY, mock::ALICE_TOKEN);
    let recipes = mock::seafood_recipes();
    let recipe = &recipes[1];

    Mock::given(method("POST"))
        .and(path("/api/users/favorites"))
        .and(body_json(json!({
            "recipeId": "52819",
            "recipeName": "Cajun spiced fish tacos",
            "recipeImage": "https://img.example.com/52819.jpg",
            "category": "Seafood",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(mock::ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    client
        .add_to_favorites(&requests::AddFavorite::from(recipe))
        .await?;

    Ok(())
}

#[tokio::test]
async fn duplicate_favorite_is_rejected() -> anyhow::Result<()> {
    let (server, storage, client) = spawn_client().await;
    storage.set(TOKEN_KEY, mock::ALICE_TOKEN);

    Mock::given(method("POST"))
        .and(path("/api/users/favorites"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(mock::error_body("Recipe already in favorites")),
        )
        .mount(&server)
        .await;

    let result = client
        .add_to_favorites(&requests::AddFavorite::from(
            &mock::seafood_recipes()[0],
        ))
        .await;

    let message = result
        .as_ref()
        .err()
        .map(|e| e.user_message("Failed to add to favorites"));
    assert_eq!(message.as_deref(), Some("Recipe already in favorites"));
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn remove_and_check_favorite() -> anyhow::Result<()> {
    let (server, storage, client) = spawn_client().await;
    storage.set(TOKEN_KEY, mock::ALICE_TOKEN);
    let recipe_id = RecipeId::from("52959");

    Mock::given(method("DELETE"))
        .and(path("/api/users/favorites/52959"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock::ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/favorites/check/52959"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            mock::envelope(json!({ "isFavorite": false })),
        ))
        .mount(&server)
        .await;

    client.remove_from_favorites(&recipe_id).await?;
    assert!(!client.check_favorite_status(&recipe_id).await?);

    Ok(())
}

#[tokio::test]
async fn favorites_by_category() -> anyhow::Result<()> {
    let (server, storage, client) = spawn_client().await;
    storage.set(TOKEN_KEY, mock::ALICE_TOKEN);
    let salmon = mock::favorite(
        &mock::seafood_recipes()[0],
        "2025-01-01T12:00:00Z",
    );

    Mock::given(method("GET"))
        .and(path("/api/users/favorites/by-category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            mock::envelope(json!({
                "favoritesByCategory": { "Seafood": [salmon.clone()] }
            })),
        ))
        .mount(&server)
        .await;

    let grouped = client.get_favorites_by_category().await?;
    assert_eq!(grouped["Seafood"], vec![salmon]);

    Ok(())
}

#[tokio::test]
async fn clear_favorites_and_stats() -> anyhow::Result<()> {
    let (server, storage, client) = spawn_client().await;
    storage.set(TOKEN_KEY, mock::ALICE_TOKEN);

    Mock::given(method("DELETE"))
        .and(path("/api/users/favorites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock::ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            mock::envelope(json!({
                "stats": {
                    "totalFavorites": 3,
                    "favoritesByCategory": { "Seafood": 2, "Dessert": 1 },
                    "memberSince": "2024-11-20T18:00:00Z",
                }
            })),
        ))
        .mount(&server)
        .await;

    client.clear_all_favorites().await?;
    let stats = client.get_user_stats().await?;
    assert_eq!(stats.total_favorites, 3);
    assert_eq!(stats.favorites_by_category["Seafood"], 2);
    assert_eq!(
        stats.member_since,
        Some(mock::timestamp("2024-11-20T18:00:00Z"))
    );
    assert_eq!(stats.last_login, None);

    Ok(())
}
