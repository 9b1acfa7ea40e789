use payloads::RecipeId;
use serde_json::json;
use std::time::Duration;
use test_helpers::{mock, spawn_app};
use ui::ToastType;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn fetch_categories_fills_slot() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            mock::envelope(json!({ "categories": mock::categories() })),
        ))
        .mount(&app.server)
        .await;

    app.stores.recipes.fetch_categories().await;

    let state = app.recipe_state();
    assert!(!state.categories.is_loading());
    assert_eq!(state.categories.get(), Some(&mock::categories()));

    Ok(())
}

#[tokio::test]
async fn failed_fetch_keeps_prior_data() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            mock::envelope(json!({ "categories": mock::categories() })),
        ))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/recipes/categories"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.server)
        .await;

    app.stores.recipes.fetch_categories().await;
    app.stores.recipes.fetch_categories().await;

    let state = app.recipe_state();
    assert!(!state.categories.is_loading());
    assert_eq!(state.categories.get(), Some(&mock::categories()));
    assert!(app.has_toast("Failed to fetch categories"));

    Ok(())
}

#[tokio::test]
async fn category_fetches_merge_by_key() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/by-category/Seafood"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::recipes_body(&mock::seafood_recipes())),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/recipes/by-category/Dessert"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::recipes_body(&mock::dessert_recipes())),
        )
        .mount(&app.server)
        .await;

    app.stores.recipes.fetch_recipes_by_category("Seafood").await;
    let seafood = app
        .recipe_state()
        .recipes_by_category
        .get(&"Seafood".to_string())
        .cloned();
    app.stores.recipes.fetch_recipes_by_category("Dessert").await;

    let state = app.recipe_state();
    let by_category = &state.recipes_by_category;
    assert_eq!(by_category.get(&"Seafood".to_string()).cloned(), seafood);
    assert_eq!(
        by_category.get(&"Dessert".to_string()),
        Some(&mock::dessert_recipes())
    );
    assert!(!by_category.is_loading());

    Ok(())
}

#[tokio::test]
async fn overlapping_category_fetches_both_land() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/by-category/Seafood"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::recipes_body(&mock::seafood_recipes()))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/recipes/by-category/Dessert"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::recipes_body(&mock::dessert_recipes())),
        )
        .mount(&app.server)
        .await;

    let recipes = &app.stores.recipes;
    tokio::join!(
        recipes.fetch_recipes_by_category("Seafood"),
        recipes.fetch_recipes_by_category("Dessert"),
    );

    let state = app.recipe_state();
    assert_eq!(state.recipes_by_category.entries().len(), 2);
    assert!(!state.recipes_by_category.is_loading());

    Ok(())
}

#[tokio::test]
async fn category_failure_names_the_category() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/by-category/Seafood"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&app.server)
        .await;

    app.stores.recipes.fetch_recipes_by_category("Seafood").await;

    let state = app.recipe_state();
    assert!(!state.recipes_by_category.is_loading_key(&"Seafood".into()));
    assert!(state.recipes_by_category.entries().is_empty());
    assert!(app.has_toast("Failed to fetch Seafood recipes"));

    Ok(())
}

#[tokio::test]
async fn stale_search_response_is_discarded() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/search"))
        .and(query_param("search", "fish"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::recipes_body(&mock::seafood_recipes()))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/recipes/search"))
        .and(query_param("search", "tart"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::recipes_body(&mock::dessert_recipes())),
        )
        .mount(&app.server)
        .await;

    let recipes = &app.stores.recipes;
    tokio::join!(recipes.search_recipes("fish"), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        recipes.search_recipes("tart").await;
    });

    let state = app.recipe_state();
    assert_eq!(state.search_term.as_deref(), Some("tart"));
    assert_eq!(state.search_results.get(), Some(&mock::dessert_recipes()));
    assert!(!state.search_results.is_loading());

    Ok(())
}

#[tokio::test]
async fn search_not_found_is_an_empty_result() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/search"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(mock::error_body("No recipes found")),
        )
        .mount(&app.server)
        .await;

    app.stores.recipes.search_recipes("zzzz").await;

    let state = app.recipe_state();
    assert_eq!(state.search_results.get(), Some(&Vec::new()));
    assert!(!state.search_results.is_loading());
    assert!(app.has_toast("No recipes found for your search"));
    assert!(app.toasts().messages_of(ToastType::Error).is_empty());

    Ok(())
}

#[tokio::test]
async fn search_with_no_list_is_an_empty_result() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::envelope(json!({ "count": 0 }))),
        )
        .mount(&app.server)
        .await;

    app.stores.recipes.search_recipes("zzzz").await;

    assert_eq!(app.recipe_state().search_results.get(), Some(&Vec::new()));
    assert_eq!(
        app.toasts().messages_of(ToastType::Info),
        ["No recipes found for your search"]
    );

    Ok(())
}

#[tokio::test]
async fn search_failure_reports_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.server)
        .await;

    app.stores.recipes.search_recipes("fish").await;

    let state = app.recipe_state();
    assert!(!state.search_results.data().is_fetched());
    assert!(!state.search_results.is_loading());
    assert!(app.has_toast("Search failed"));

    Ok(())
}

#[tokio::test]
async fn details_and_random_fill_their_slots() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let details = mock::recipe_details("52959", "Baked salmon");
    let random = mock::recipe_details("53043", "Fish fofos");

    Mock::given(method("GET"))
        .and(path("/api/recipes/details/52959"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(mock::recipe_body(&details)),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/recipes/random"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(mock::recipe_body(&random)),
        )
        .mount(&app.server)
        .await;

    app.stores
        .recipes
        .fetch_recipe_details(&RecipeId::from("52959"))
        .await;
    app.stores.recipes.fetch_random_recipe().await;

    let state = app.recipe_state();
    assert_eq!(state.selected_recipe.get(), Some(&details));
    assert_eq!(state.random_recipe.get(), Some(&random));

    Ok(())
}

#[tokio::test]
async fn missing_recipe_reports_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/details/1"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(mock::error_body("Recipe not found")),
        )
        .mount(&app.server)
        .await;

    app.stores
        .recipes
        .fetch_recipe_details(&RecipeId::from("1"))
        .await;

    assert!(app.recipe_state().selected_recipe.get().is_none());
    assert!(app.has_toast("Failed to fetch recipe details"));

    Ok(())
}

#[tokio::test]
async fn featured_recipes_merge_by_category() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            mock::envelope(json!({
                "featured": { "Seafood": mock::seafood_recipes() }
            })),
        ))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/recipes/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            mock::envelope(json!({
                "featured": { "Dessert": mock::dessert_recipes() }
            })),
        ))
        .mount(&app.server)
        .await;

    app.stores.recipes.fetch_featured_recipes().await;
    app.stores.recipes.fetch_featured_recipes().await;

    let state = app.recipe_state();
    let featured = state.featured.get().expect("featured fetched");
    assert_eq!(featured.get("Seafood"), Some(&mock::seafood_recipes()));
    assert_eq!(featured.get("Dessert"), Some(&mock::dessert_recipes()));

    Ok(())
}
