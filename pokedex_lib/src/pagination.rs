//! Name-ordered pagination over the full upstream item list.

use std::cmp::Ordering;

use pokeapi::types::ItemSummary;
use serde::{Deserialize, Serialize};

/// Items per page.
pub const PAGE_SIZE: usize = 5;

/// One page of the name-sorted item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult {
    #[serde(serialize_with = "crate::number::serialize_f64_compact")]
    pub validated_page: f64,
    pub total_pages: u64,
    pub results: Vec<ItemSummary>,
}

/// Sorts `items` by name and cuts out the window for `validated_page`.
///
/// The page must already be validated (>= 1). A page past the end yields an
/// empty window, not an error. Fractional pages give a window starting at the
/// truncated offset.
pub fn paginate(mut items: Vec<ItemSummary>, validated_page: f64) -> PaginatedResult {
    items.sort_by(|a, b| locale_compare(&a.name, &b.name));

    let total = items.len();
    let offset = (validated_page - 1.0) * PAGE_SIZE as f64;
    let start = (offset.trunc() as usize).min(total);
    let end = ((offset + PAGE_SIZE as f64).trunc() as usize).min(total);

    PaginatedResult {
        validated_page,
        total_pages: total.div_ceil(PAGE_SIZE) as u64,
        results: items.drain(start..end).collect(),
    }
}

/// Compares two strings the way a default, locale-aware collation does for
/// Latin text.
///
/// Levels, each consulted only on a tie at the previous one:
/// 1. letters compared case- and accent-insensitively, with
///    whitespace < punctuation < digits < letters;
/// 2. unaccented before accented;
/// 3. lowercase before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| a.chars().map(is_accented).cmp(b.chars().map(is_accented)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
}

fn primary_key(c: char) -> (u8, char) {
    let base = fold_accent(c.to_lowercase().next().unwrap_or(c));
    let class = if c.is_whitespace() {
        0
    } else if base.is_alphabetic() {
        3
    } else if base.is_numeric() {
        2
    } else {
        1
    };
    (class, base)
}

fn is_accented(c: char) -> bool {
    let lower = c.to_lowercase().next().unwrap_or(c);
    fold_accent(lower) != lower
}

fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ś' | 'š' => 's',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<ItemSummary> {
        names.iter().map(|n| ItemSummary::named(*n)).collect()
    }

    fn names(result: &PaginatedResult) -> Vec<&str> {
        result.results.iter().map(|i| i.name.as_str()).collect()
    }

    const SEVEN: [&str; 7] = [
        "bulbasaur",
        "charmander",
        "squirtle",
        "pikachu",
        "eevee",
        "snorlax",
        "mew",
    ];

    #[test]
    fn second_page_of_seven() {
        let result = paginate(items(&SEVEN), 2.0);
        assert_eq!(result.validated_page, 2.0);
        assert_eq!(result.total_pages, 2);
        assert_eq!(names(&result), vec!["snorlax", "squirtle"]);
    }

    #[test]
    fn first_page_is_sorted() {
        let result = paginate(items(&SEVEN), 1.0);
        assert_eq!(
            names(&result),
            vec!["bulbasaur", "charmander", "eevee", "mew", "pikachu"]
        );
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let result = paginate(items(&["bulbasaur", "charmander", "squirtle"]), 5.0);
        assert_eq!(result.validated_page, 5.0);
        assert_eq!(result.total_pages, 1);
        assert!(result.results.is_empty());
    }

    #[test]
    fn empty_set_has_no_pages() {
        let result = paginate(Vec::new(), 1.0);
        assert_eq!(result.total_pages, 0);
        assert!(result.results.is_empty());
    }

    #[test]
    fn exact_multiple_of_page_size() {
        let result = paginate(items(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]), 2.0);
        assert_eq!(result.total_pages, 2);
        assert_eq!(names(&result), vec!["f", "g", "h", "i", "j"]);
    }

    #[test]
    fn fractional_page_truncates_the_window() {
        // offset 2.5 → items 2..7
        let result = paginate(items(&SEVEN), 1.5);
        assert_eq!(result.validated_page, 1.5);
        assert_eq!(names(&result), vec!["eevee", "mew", "pikachu", "snorlax", "squirtle"]);
    }

    #[test]
    fn serializes_camel_case() {
        let result = paginate(items(&["mew"]), 1.0);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "validatedPage": 1,
                "totalPages": 1,
                "results": [{ "name": "mew" }]
            })
        );
    }

    // -- Collation --

    #[test]
    fn case_insensitive_primary_order() {
        assert_eq!(locale_compare("Bulbasaur", "abra"), Ordering::Greater);
        assert_eq!(locale_compare("abra", "Bulbasaur"), Ordering::Less);
    }

    #[test]
    fn lowercase_first_on_tie() {
        assert_eq!(locale_compare("eevee", "Eevee"), Ordering::Less);
    }

    #[test]
    fn accents_are_secondary() {
        assert_eq!(locale_compare("flabébé", "flabebf"), Ordering::Less);
        assert_eq!(locale_compare("flabebe", "flabébé"), Ordering::Less);
    }

    #[test]
    fn punctuation_and_digits_before_letters() {
        assert_eq!(locale_compare("porygon-z", "porygon2"), Ordering::Less);
        assert_eq!(locale_compare("porygon2", "porygonz"), Ordering::Less);
        assert_eq!(locale_compare("mr mime", "mr-mime"), Ordering::Less);
    }

    #[test]
    fn hyphenated_names_sort_with_their_stem() {
        let mut names = vec![
            "nidorina",
            "nidoran-m",
            "nidoking",
            "nidorino",
            "nidoran-f",
            "nidoqueen",
        ];
        names.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(
            names,
            vec![
                "nidoking",
                "nidoqueen",
                "nidoran-f",
                "nidoran-m",
                "nidorina",
                "nidorino",
            ]
        );
    }

    #[test]
    fn hyphen_sorts_before_a_letter_at_the_same_position() {
        assert_eq!(locale_compare("nidoran-f", "nidoranf"), Ordering::Less);
        assert_eq!(locale_compare("ho-oh", "hoothoot"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_compare("mew", "mewtwo"), Ordering::Less);
    }

    #[test]
    fn sort_is_stable_for_equal_names() {
        let mut list = vec![
            ItemSummary {
                name: "ditto".to_string(),
                url: Some("first".to_string()),
            },
            ItemSummary::named("abra"),
            ItemSummary {
                name: "ditto".to_string(),
                url: Some("second".to_string()),
            },
        ];
        list.sort_by(|a, b| locale_compare(&a.name, &b.name));
        assert_eq!(list[1].url.as_deref(), Some("first"));
        assert_eq!(list[2].url.as_deref(), Some("second"));
    }
}
