/// Used when `RECIPE_API_URL` is not set at build time.
pub const DEFAULT_API_ADDRESS: &str = "http://localhost:8000";

/// Base address of the recipe API, configurable at build time via
/// `RECIPE_API_URL`.
pub fn api_address() -> String {
    normalize_address(
        option_env!("RECIPE_API_URL").unwrap_or(DEFAULT_API_ADDRESS),
    )
}

/// Strip trailing slashes and a trailing `/api`, which the client appends
/// itself.
pub fn normalize_address(address: &str) -> String {
    let address = address.trim().trim_end_matches('/');
    let address = address.strip_suffix("/api").unwrap_or(address);
    let address = address.trim_end_matches('/');
    if address.is_empty() {
        DEFAULT_API_ADDRESS.to_string()
    } else {
        address.to_string()
    }
}
