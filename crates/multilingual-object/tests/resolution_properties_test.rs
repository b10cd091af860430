//! Property tests for translation resolution

use multilingual_common::EntityId;
use multilingual_object::{
    Culture, MatchSource, MultiLingualBook, MultiLingualObjectManager, TranslationRequest,
};
use proptest::prelude::*;

const LANGUAGES: [&str; 8] = ["en", "en-US", "en-GB", "zh", "zh-Hans", "de", "fr", "tr"];

fn language() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LANGUAGES.to_vec())
}

fn any_book() -> impl Strategy<Value = MultiLingualBook> {
    prop::collection::vec(language(), 0..6).prop_map(|languages| {
        languages
            .into_iter()
            .enumerate()
            .fold(MultiLingualBook::new(EntityId::new(), 1.0), |book, (i, language)| {
                book.with_translation(language, format!("name-{i}"))
            })
    })
}

proptest! {
    #[test]
    fn resolution_is_deterministic_and_read_only(book in any_book(), culture in language()) {
        let manager = MultiLingualObjectManager::default();
        let before = book.clone();
        let request = TranslationRequest::new().culture(Culture::new(culture).unwrap());

        let first = manager.resolve(&book, &request).map(|m| m.translation().clone()).ok();
        let second = manager.resolve(&book, &request).map(|m| m.translation().clone()).ok();

        prop_assert_eq!(first, second);
        prop_assert_eq!(book, before);
    }

    #[test]
    fn present_explicit_language_always_wins(book in any_book(), culture in language()) {
        prop_assume!(!book.translations.is_empty());
        let manager = MultiLingualObjectManager::default();
        let wanted = book.translations.last().unwrap().language.clone();

        let request = TranslationRequest::new()
            .language(wanted.clone())
            .culture(Culture::new(culture).unwrap());
        let found = manager.resolve(&book, &request).unwrap();

        prop_assert_eq!(found.source(), MatchSource::ExplicitLanguage);
        prop_assert_eq!(&found.translation().language, &wanted);
    }

    #[test]
    fn exact_culture_match_beats_fallbacks(book in any_book(), culture in language()) {
        let manager = MultiLingualObjectManager::default();
        let request = TranslationRequest::new().culture(Culture::new(culture).unwrap());
        let has_exact = book.translations.iter().any(|t| t.language == culture);

        match manager.resolve(&book, &request) {
            Ok(found) if has_exact => {
                prop_assert_eq!(found.source(), MatchSource::CurrentCulture);
                prop_assert_eq!(found.translation().language.as_str(), culture);
            }
            Ok(found) => prop_assert_ne!(found.source(), MatchSource::CurrentCulture),
            Err(_) => prop_assert!(!has_exact && !book.translations.iter().any(|t| t.language == "en")),
        }
    }
}
