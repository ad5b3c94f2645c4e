use cinedex_model::Movie;

use crate::error::{Error, Result};

/// Outcome of a closest-match scan: the winning candidate's position in the
/// input list and its best edit distance from the query (0 = exact match
/// after case folding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestMatch {
    pub index: usize,
    pub score: usize,
}

/// Pick the candidate whose title (or any alternate title) has the smallest
/// Levenshtein distance to `title`, comparing case-insensitively.
///
/// Ties keep the first candidate that reached the minimum: callers rely on
/// the selection being deterministic in input order, so the comparison is a
/// strict `<` and never replaces an equal score.
pub fn find_closest_match(title: &str, movies: &[Movie]) -> Result<ClosestMatch> {
    if movies.is_empty() {
        return Err(Error::InvalidInput("no movies were provided".to_string()));
    }

    let query = title.to_lowercase();
    let mut best = ClosestMatch {
        index: 0,
        score: usize::MAX,
    };

    for (index, movie) in movies.iter().enumerate() {
        let titles = std::iter::once(movie.title())
            .chain(movie.alternate_titles().iter().map(String::as_str));

        for candidate in titles {
            let score = strsim::levenshtein(&query, &candidate.to_lowercase());
            if score < best.score {
                best = ClosestMatch { index, score };
            }
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinedex_model::MediaType;

    fn movie(id: &str, title: &str) -> Movie {
        Movie::new(id, title, MediaType::Movie, 2014)
    }

    #[test]
    fn exact_title_scores_zero() {
        let movies = vec![
            movie("1", "Road House"),
            movie("2", "Ghostbusters"),
            movie("3", "Guardians of the Galaxy"),
        ];

        let closest = find_closest_match("Guardians of the Galaxy", &movies).unwrap();
        assert_eq!(closest.index, 2);
        assert_eq!(closest.score, 0);
    }

    #[test]
    fn score_counts_edit_distance() {
        let movies = vec![movie("1", "Guardians of the Galaxy II")];

        let closest = find_closest_match("Guardians of the Galaxy", &movies).unwrap();
        assert_eq!(closest.index, 0);
        assert_eq!(closest.score, 3);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let movies = vec![movie("1", "GUARDIANS OF THE GALAXY")];

        let closest = find_closest_match("guardians of the galaxy", &movies).unwrap();
        assert_eq!(closest.score, 0);
    }

    #[test]
    fn alternate_titles_participate() {
        let mut aliased = movie("1", "Birdperson");
        aliased.add_alternate_title("Guardians of the Galaxy");
        let movies = vec![movie("2", "Road House"), aliased];

        let closest = find_closest_match("Guardians of the Galaxy", &movies).unwrap();
        assert_eq!(closest.index, 1);
        assert_eq!(closest.score, 0);
    }

    #[test]
    fn first_candidate_wins_ties() {
        let movies = vec![
            movie("1", "Ghostbusters 1"),
            movie("2", "Ghostbusters 2"),
        ];

        let closest = find_closest_match("Ghostbusters 3", &movies).unwrap();
        assert_eq!(closest.index, 0);
        assert_eq!(closest.score, 1);
    }

    #[test]
    fn empty_candidate_list_is_invalid_input() {
        assert!(matches!(
            find_closest_match("anything", &[]),
            Err(Error::InvalidInput(_))
        ));
    }
}
