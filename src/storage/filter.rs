use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::common::Message;

/// Lower-cases, decomposes, and strips combining marks.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect()
}

pub fn is_active(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Messages whose name, email, or body contain `query`, in cache order.
pub fn apply<'a>(messages: &'a [Message], query: &str) -> Vec<&'a Message> {
    if !is_active(query) {
        return messages.iter().collect();
    }

    let needle = normalize(query.trim());
    messages
        .iter()
        .filter(|message| {
            let haystack = format!("{} {} {}", message.name, message.email, message.message);
            normalize(&haystack).contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn named(name: &str) -> Message {
        Message {
            name: name.to_string(),
            ..Message::default()
        }
    }

    #[test]
    fn normalization_ignores_case_and_diacritics() {
        assert_eq!(normalize("São Paulo"), normalize("sao paulo"));
        assert_eq!(normalize("JOSÉ"), "jose");
    }

    #[test]
    fn accented_name_matches_plain_query() {
        let cache = vec![named("José"), named("Maria")];
        let shown = apply(&cache, "jose");
        assert_eq!(shown, vec![&cache[0]]);
    }

    #[test]
    fn query_matches_email_and_body() {
        let cache = vec![
            Message {
                email: "ana@x.com".into(),
                ..Message::default()
            },
            Message {
                message: "Olá, preciso de ajuda".into(),
                ..Message::default()
            },
        ];
        assert_eq!(apply(&cache, "ANA@").len(), 1);
        assert_eq!(apply(&cache, "  ola ").len(), 1);
        assert!(apply(&cache, "nothing").is_empty());
    }

    #[test]
    fn blank_query_shows_everything() {
        let cache = vec![named("b"), named("a")];
        assert_eq!(apply(&cache, "   "), vec![&cache[0], &cache[1]]);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(text in "[a-zA-ZÀ-ÿ0-9 @.]{0,32}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn empty_query_returns_cache_unchanged(names in prop::collection::vec("[a-zA-ZÀ-ÿ ]{0,12}", 0..8)) {
            let cache: Vec<Message> = names.iter().map(|name| named(name)).collect();
            let shown = apply(&cache, "");
            prop_assert_eq!(shown.len(), cache.len());
            for (shown, original) in shown.iter().zip(&cache) {
                prop_assert!(std::ptr::eq(*shown, original));
            }
        }

        #[test]
        fn result_is_a_subsequence_of_cache(
            names in prop::collection::vec("[a-zA-ZÀ-ÿ ]{0,12}", 0..8),
            query in "[a-zé]{0,3}",
        ) {
            let cache: Vec<Message> = names.iter().map(|name| named(name)).collect();
            let shown = apply(&cache, &query);
            let mut cursor = cache.iter();
            for item in shown {
                prop_assert!(cursor.any(|candidate| std::ptr::eq(candidate, item)));
            }
        }
    }
}
