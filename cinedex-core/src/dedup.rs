use std::collections::HashMap;

use cinedex_model::Movie;

/// Collapse a result list to one movie per natural key, where the natural
/// key is the exact concatenation of title and year.
///
/// Some catalogs return the same film several times under distinct provider
/// ids, but forcing this onto every lookup path would surprise callers that
/// want the raw listing, so it stays a standalone service. Later entries
/// overwrite earlier ones under a colliding key while the output keeps the
/// keys' first-seen order.
pub fn remove_duplicates(movies: Vec<Movie>) -> Vec<Movie> {
    let mut order: Vec<String> = Vec::new();
    let mut unique: HashMap<String, Movie> = HashMap::new();

    for movie in movies {
        let key = format!("{}{}", movie.title(), movie.year());
        if unique.insert(key.clone(), movie).is_none() {
            order.push(key);
        }
    }

    order
        .into_iter()
        .filter_map(|key| unique.remove(&key))
        .collect()
}
