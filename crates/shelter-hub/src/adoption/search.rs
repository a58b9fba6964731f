/// Case-insensitive substring match used by the pet search box.
///
/// An empty or whitespace-only query matches every pet, mirroring the
/// wildcard behavior of a `%term%` pattern search with an empty term.
pub fn name_matches(name: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    name.to_lowercase().contains(&query.to_lowercase())
}
