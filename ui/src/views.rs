//! Filtered, sorted and grouped projections of store data for display.

use crate::state::RecipeState;
use payloads::{Category, FavoriteRecipe, Recipe};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FavoriteSort {
    Name,
    Category,
    /// Most recently added first.
    #[default]
    Date,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn eq_ignore_case(value: Option<&str>, wanted: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase() == wanted.to_lowercase())
}

/// Favorites whose name or category contains `term`, in `sort` order.
pub fn filter_and_sort_favorites(
    favorites: &[FavoriteRecipe],
    term: &str,
    sort: FavoriteSort,
) -> Vec<FavoriteRecipe> {
    let mut filtered: Vec<FavoriteRecipe> = favorites
        .iter()
        .filter(|f| {
            contains_ignore_case(&f.recipe_name, term)
                || contains_ignore_case(&f.category, term)
        })
        .cloned()
        .collect();

    match sort {
        FavoriteSort::Name => filtered.sort_by_cached_key(|f| {
            (f.recipe_name.to_lowercase(), f.recipe_name.clone())
        }),
        FavoriteSort::Category => filtered
            .sort_by_cached_key(|f| (f.category.to_lowercase(), f.category.clone())),
        FavoriteSort::Date => {
            filtered.sort_by(|a, b| b.added_at.cmp(&a.added_at))
        }
    }
    filtered
}

/// Group favorites by category, keeping categories in order of first
/// appearance and favorites in input order.
pub fn group_by_category(
    favorites: &[FavoriteRecipe],
) -> Vec<(String, Vec<FavoriteRecipe>)> {
    let mut groups: Vec<(String, Vec<FavoriteRecipe>)> = Vec::new();
    for favorite in favorites {
        match groups.iter_mut().find(|(c, _)| *c == favorite.category) {
            Some((_, group)) => group.push(favorite.clone()),
            None => groups
                .push((favorite.category.clone(), vec![favorite.clone()])),
        }
    }
    groups
}

/// Facets selected on the search page. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub category: Option<String>,
    pub area: Option<String>,
}

impl SearchFilter {
    fn matches(&self, recipe: &Recipe) -> bool {
        let category_ok = self.category.as_deref().is_none_or(|wanted| {
            eq_ignore_case(recipe.category.as_deref(), wanted)
        });
        let area_ok = self.area.as_deref().is_none_or(|wanted| {
            eq_ignore_case(recipe.area.as_deref(), wanted)
        });
        category_ok && area_ok
    }
}

pub fn filter_search_results<'a>(
    results: &'a [Recipe],
    filter: &SearchFilter,
) -> Vec<&'a Recipe> {
    results.iter().filter(|r| filter.matches(r)).collect()
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for value in values.filter(|v| !v.is_empty()) {
        if !unique.iter().any(|u| u == value) {
            unique.push(value.to_string());
        }
    }
    unique.sort();
    unique
}

/// Distinct areas present in the results, for the area facet.
pub fn unique_areas(results: &[Recipe]) -> Vec<String> {
    unique_sorted(results.iter().filter_map(|r| r.area.as_deref()))
}

/// Distinct categories present in the results, for the category facet.
pub fn unique_categories(results: &[Recipe]) -> Vec<String> {
    unique_sorted(results.iter().filter_map(|r| r.category.as_deref()))
}

pub fn filter_categories<'a>(
    categories: &'a [Category],
    term: &str,
) -> Vec<&'a Category> {
    categories
        .iter()
        .filter(|c| contains_ignore_case(&c.name, term))
        .collect()
}

/// Cached recipes of `category` whose name contains `term`. Empty if the
/// category has not been fetched.
pub fn category_recipes<'a>(
    state: &'a RecipeState,
    category: &str,
    term: &str,
) -> Vec<&'a Recipe> {
    state
        .recipes_by_category
        .get(&category.to_string())
        .map(|recipes| {
            recipes
                .iter()
                .filter(|r| contains_ignore_case(&r.name, term))
                .collect()
        })
        .unwrap_or_default()
}
