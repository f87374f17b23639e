use crate::catalog::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Listing(Category),
    /// `/<section>/<id>`; `section` is kept so the back link can return to it.
    Detail {
        section: String,
        id: String,
    },
    Timeline,
    Contact,
    File(String),
}

/// Maps a request path (without query string) to a route. Paths that match
/// nothing resolve to the home page.
pub fn resolve(path: &str) -> Route {
    let trimmed = path.trim_end_matches('/');
    let segments: Vec<&str> = trimmed
        .strip_prefix('/')
        .unwrap_or(trimmed)
        .split('/')
        .collect();

    match segments.as_slice() {
        ["files", name] if !name.is_empty() => Route::File((*name).to_string()),
        ["about"] => Route::About,
        ["timeline"] => Route::Timeline,
        ["contact"] => Route::Contact,
        [slug] => Category::from_slug(slug)
            .map(Route::Listing)
            .unwrap_or(Route::Home),
        [section, id] if !section.is_empty() && !id.is_empty() => Route::Detail {
            section: (*section).to_string(),
            id: (*id).to_string(),
        },
        _ => Route::Home,
    }
}
