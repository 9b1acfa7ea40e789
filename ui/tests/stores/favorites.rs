use payloads::RecipeId;
use std::time::Duration;
use test_helpers::{mock, spawn_app};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn accept_favorite_writes(app: &test_helpers::TestApp) {
    Mock::given(method("POST"))
        .and(path("/api/users/favorites"))
        .respond_with(ResponseTemplate::new(201).set_body_json(mock::ok_body()))
        .mount(&app.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/favorites/52959"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock::ok_body()))
        .mount(&app.server)
        .await;
}

#[tokio::test]
async fn add_requires_login() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/api/users/favorites"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.server)
        .await;

    app.stores
        .recipes
        .add_to_favorites(&mock::seafood_recipes()[0])
        .await;

    assert!(app.has_toast("Please login to add favorites"));
    assert!(app.favorites_state().list().is_empty());

    Ok(())
}

#[tokio::test]
async fn add_prepends_and_persists() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dessert = mock::dessert_recipes();
    app.login_alice(vec![mock::favorite(&dessert[0], "2025-01-01T12:00:00Z")])
        .await?;
    accept_favorite_writes(&app).await;

    let seafood = mock::seafood_recipes();
    let salmon = &seafood[0];
    app.stores.recipes.add_to_favorites(salmon).await;

    assert_eq!(app.favorite_ids(), ["52959", "52768"]);
    assert!(app.stores.recipes.is_favorite(&salmon.id));
    assert!(app.has_toast("Added to favorites!"));

    let stored = app.stored_identity().expect("identity persisted");
    let stored_ids: Vec<_> = stored
        .favorite_recipes
        .iter()
        .map(|f| f.recipe_id.to_string())
        .collect();
    assert_eq!(stored_ids, ["52959", "52768"]);
    assert_eq!(stored.favorite_recipes[0].recipe_name, salmon.name);

    Ok(())
}

#[tokio::test]
async fn re_adding_moves_recipe_to_front() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seafood = mock::seafood_recipes();
    app.login_alice(vec![
        mock::favorite(&seafood[1], "2025-01-02T12:00:00Z"),
        mock::favorite(&seafood[0], "2025-01-01T12:00:00Z"),
    ])
    .await?;
    accept_favorite_writes(&app).await;

    app.stores.recipes.add_to_favorites(&seafood[0]).await;

    assert_eq!(app.favorite_ids(), ["52959", "52819"]);
    let favorites = app.favorites_state();
    let readded = &favorites.list()[0];
    assert!(readded.added_at > mock::timestamp("2025-01-02T12:00:00Z"));

    Ok(())
}

#[tokio::test]
async fn add_without_category_is_unknown() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_alice(vec![]).await?;
    accept_favorite_writes(&app).await;

    let mut recipe = mock::seafood_recipes()[0].clone();
    recipe.category = None;
    app.stores.recipes.add_to_favorites(&recipe).await;

    assert_eq!(app.favorites_state().list()[0].category, "Unknown");

    Ok(())
}

#[tokio::test]
async fn add_failure_shows_server_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_alice(vec![]).await?;

    Mock::given(method("POST"))
        .and(path("/api/users/favorites"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(mock::error_body("Recipe already in favorites")),
        )
        .mount(&app.server)
        .await;

    app.stores
        .recipes
        .add_to_favorites(&mock::seafood_recipes()[0])
        .await;

    assert!(app.has_toast("Recipe already in favorites"));
    assert!(app.favorites_state().list().is_empty());

    Ok(())
}

#[tokio::test]
async fn remove_filters_recipe_out() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seafood = mock::seafood_recipes();
    app.login_alice(vec![
        mock::favorite(&seafood[0], "2025-01-02T12:00:00Z"),
        mock::favorite(&seafood[1], "2025-01-01T12:00:00Z"),
    ])
    .await?;
    accept_favorite_writes(&app).await;

    app.stores.recipes.remove_from_favorites(&seafood[0].id).await;

    assert_eq!(app.favorite_ids(), ["52819"]);
    assert!(!app.stores.recipes.is_favorite(&seafood[0].id));
    assert!(app.has_toast("Removed from favorites"));
    assert_eq!(
        app.stored_identity()
            .map(|identity| identity.favorite_recipes.len()),
        Some(1)
    );

    Ok(())
}

#[tokio::test]
async fn remove_without_login_is_silent() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    app.stores
        .recipes
        .remove_from_favorites(&RecipeId::from("52959"))
        .await;

    assert!(app.toasts().toasts.is_empty());

    Ok(())
}

#[tokio::test]
async fn remove_failure_keeps_favorite() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let salmon = mock::seafood_recipes()[0].clone();
    app.login_alice(vec![mock::favorite(&salmon, "2025-01-01T12:00:00Z")])
        .await?;

    Mock::given(method("DELETE"))
        .and(path("/api/users/favorites/52959"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.server)
        .await;

    app.stores.recipes.remove_from_favorites(&salmon.id).await;

    assert!(app.stores.recipes.is_favorite(&salmon.id));
    assert!(app.has_toast("Failed to remove from favorites"));

    Ok(())
}

#[tokio::test]
async fn add_then_remove_leaves_no_trace() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dessert = mock::dessert_recipes();
    app.login_alice(vec![mock::favorite(&dessert[0], "2025-01-01T12:00:00Z")])
        .await?;
    accept_favorite_writes(&app).await;

    let salmon = mock::seafood_recipes()[0].clone();
    for _ in 0..2 {
        app.stores.recipes.add_to_favorites(&salmon).await;
        assert!(app.stores.recipes.is_favorite(&salmon.id));
        app.stores.recipes.add_to_favorites(&salmon).await;
        app.stores.recipes.remove_from_favorites(&salmon.id).await;
        assert!(!app.stores.recipes.is_favorite(&salmon.id));
    }

    assert_eq!(app.favorite_ids(), ["52768"]);
    let identity = app.stores.session.identity().expect("signed in");
    assert_eq!(identity.favorite_recipes.len(), 1);
    assert_eq!(app.stored_identity(), Some(identity));

    Ok(())
}

#[tokio::test]
async fn fetch_replaces_local_favorites() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seafood = mock::seafood_recipes();
    app.login_alice(vec![mock::favorite(&seafood[0], "2025-01-01T12:00:00Z")])
        .await?;

    let server_list = vec![
        mock::favorite(&seafood[1], "2025-01-03T12:00:00Z"),
        mock::favorite(&seafood[2], "2025-01-02T12:00:00Z"),
    ];
    Mock::given(method("GET"))
        .and(path("/api/users/favorites"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::favorites_body(&server_list)),
        )
        .mount(&app.server)
        .await;

    app.stores.recipes.fetch_favorites().await;

    assert_eq!(app.favorite_ids(), ["52819", "53043"]);
    assert!(!app.favorites_state().is_loading());
    assert_eq!(
        app.stored_identity().map(|identity| identity.favorite_recipes),
        Some(server_list)
    );

    Ok(())
}

#[tokio::test]
async fn fetch_without_login_makes_no_request() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(path("/api/users/favorites"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    app.stores.recipes.fetch_favorites().await;

    assert!(!app.favorites_state().favorites.data().is_fetched());

    Ok(())
}

#[tokio::test]
async fn fetch_failure_is_only_logged() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let salmon = mock::seafood_recipes()[0].clone();
    app.login_alice(vec![mock::favorite(&salmon, "2025-01-01T12:00:00Z")])
        .await?;

    Mock::given(method("GET"))
        .and(path("/api/users/favorites"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.server)
        .await;

    app.stores.recipes.fetch_favorites().await;

    assert_eq!(app.favorite_ids(), ["52959"]);
    assert!(!app.favorites_state().is_loading());
    assert!(app.toasts().messages_of(ui::ToastType::Error).is_empty());

    Ok(())
}

#[tokio::test]
async fn local_change_supersedes_fetch_in_flight() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seafood = mock::seafood_recipes();
    app.login_alice(vec![mock::favorite(&seafood[1], "2025-01-01T12:00:00Z")])
        .await?;
    accept_favorite_writes(&app).await;

    Mock::given(method("GET"))
        .and(path("/api/users/favorites"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::favorites_body(&[]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&app.server)
        .await;

    let recipes = &app.stores.recipes;
    tokio::join!(recipes.fetch_favorites(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        recipes.add_to_favorites(&seafood[0]).await;
    });

    assert_eq!(app.favorite_ids(), ["52959", "52819"]);
    assert!(!app.favorites_state().is_loading());

    Ok(())
}

#[tokio::test]
async fn clear_all_empties_favorites() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seafood = mock::seafood_recipes();
    app.login_alice(vec![
        mock::favorite(&seafood[0], "2025-01-02T12:00:00Z"),
        mock::favorite(&seafood[1], "2025-01-01T12:00:00Z"),
    ])
    .await?;

    Mock::given(method("DELETE"))
        .and(path("/api/users/favorites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock::ok_body()))
        .expect(1)
        .mount(&app.server)
        .await;

    app.stores.recipes.clear_all_favorites().await;

    assert!(app.favorites_state().list().is_empty());
    assert_eq!(
        app.stored_identity().map(|identity| identity.favorite_recipes),
        Some(vec![])
    );
    assert!(app.has_toast("All favorites cleared"));

    Ok(())
}
