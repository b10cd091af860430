//! Translation resolution for multi-lingual objects

use crate::culture::{current_culture, Culture};
use crate::entity::{MultiLingualObject, ObjectTranslation};
use crate::error::{I18nError, I18nResult};
use multilingual_config::{Config, ConfigCache, ConfigLoader};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Which step of the fallback chain produced a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchSource {
    /// Language supplied explicitly by the caller
    ExplicitLanguage,
    /// The current culture itself
    CurrentCulture,
    /// A more neutral parent of the requested culture, e.g. `en` for `en-US`
    ParentCulture,
    /// The configured default language
    DefaultLanguage,
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitLanguage => f.write_str("explicit language"),
            Self::CurrentCulture => f.write_str("current culture"),
            Self::ParentCulture => f.write_str("parent culture"),
            Self::DefaultLanguage => f.write_str("default language"),
        }
    }
}

/// A resolved translation and how it was found
#[derive(Debug)]
pub struct TranslationMatch<'a, T> {
    translation: &'a T,
    language: String,
    source: MatchSource,
}

impl<'a, T> TranslationMatch<'a, T> {
    /// The chosen translation
    pub const fn translation(&self) -> &'a T {
        self.translation
    }

    /// Consume the match, yielding the translation
    pub fn into_translation(self) -> &'a T {
        self.translation
    }

    /// The candidate tag that matched
    pub fn matched_language(&self) -> &str {
        &self.language
    }

    /// The fallback step that matched
    pub const fn source(&self) -> MatchSource {
        self.source
    }
}

/// Inputs of a single resolution, passed explicitly instead of read from ambient state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRequest {
    language: Option<String>,
    culture: Option<Culture>,
    fallback_to_parent_cultures: Option<bool>,
}

impl TranslationRequest {
    /// An empty request: no culture, configured fallback behaviour
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific language, bypassing the culture entirely
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Resolve as if `culture` were current
    #[must_use]
    pub fn culture(mut self, culture: Culture) -> Self {
        self.culture = Some(culture);
        self
    }

    /// Override the configured parent-culture fallback for this request
    #[must_use]
    pub fn fallback_to_parent_cultures(mut self, enabled: bool) -> Self {
        self.fallback_to_parent_cultures = Some(enabled);
        self
    }

    fn with_culture_opt(mut self, culture: Option<Culture>) -> Self {
        self.culture = culture;
        self
    }
}

#[derive(Debug)]
struct Candidate {
    language: String,
    source: MatchSource,
}

/// Candidate language tags in fallback order, without duplicates
#[derive(Debug, Default)]
struct CandidateList {
    candidates: Vec<Candidate>,
}

impl CandidateList {
    fn push(&mut self, language: &str, source: MatchSource) {
        if !self.candidates.iter().any(|c| c.language == language) {
            self.candidates.push(Candidate {
                language: language.to_string(),
                source,
            });
        }
    }

    fn push_ancestors(&mut self, culture: &Culture) {
        for parent in culture.ancestors() {
            self.push(parent.name(), MatchSource::ParentCulture);
        }
    }

    fn find<'a, T: ObjectTranslation>(
        &self,
        translations: &'a [T],
        case_sensitive: bool,
    ) -> Option<(&'a T, &Candidate)> {
        self.candidates.iter().find_map(|candidate| {
            translations
                .iter()
                .find(|t| language_matches(t.language(), &candidate.language, case_sensitive))
                .map(|t| (t, candidate))
        })
    }

    fn attempted(&self) -> Vec<String> {
        self.candidates.iter().map(|c| c.language.clone()).collect()
    }
}

fn language_matches(tag: &str, candidate: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        tag == candidate
    } else {
        tag.eq_ignore_ascii_case(candidate)
    }
}

/// Resolves the best translation of a multi-lingual object.
///
/// Candidates are tried in order, first match wins:
///
/// 1. The explicit language, when given. The current culture is then never
///    consulted; an unmatched explicit language falls back to its own parents.
/// 2. The current culture.
/// 3. The current culture's parents (`en-US` → `en`), unless disabled.
/// 4. The configured default language.
#[derive(Debug, Clone)]
pub struct MultiLingualObjectManager {
    settings: Arc<ConfigCache>,
}

impl Default for MultiLingualObjectManager {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl MultiLingualObjectManager {
    /// Create a manager reading its settings from a shared cache
    pub fn new(settings: Arc<ConfigCache>) -> Self {
        Self { settings }
    }

    /// Create a manager with fixed settings
    pub fn from_config(config: Config) -> Self {
        Self::new(Arc::new(ConfigCache::new(config)))
    }

    /// Create a manager from a YAML settings file with environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> I18nResult<Self> {
        let config = ConfigLoader::load_config(path)?;
        info!(
            default_language = %config.localization.default_language,
            "MultiLingualObjectManager initialized"
        );
        Ok(Self::from_config(config))
    }

    /// The shared settings cache
    pub const fn settings(&self) -> &Arc<ConfigCache> {
        &self.settings
    }

    /// The default language currently configured
    pub fn default_language(&self) -> String {
        self.settings.default_language()
    }

    /// Resolve a translation using the ambient culture.
    ///
    /// When `language` is given the ambient culture is not read at all.
    pub fn get_translation<'a, C>(
        &self,
        core: &'a C,
        language: Option<&str>,
    ) -> I18nResult<&'a C::Translation>
    where
        C: MultiLingualObject,
    {
        let request = Self::ambient_request(language);
        self.resolve(core, &request)
            .map(TranslationMatch::into_translation)
    }

    /// Async form of [`get_translation`](Self::get_translation).
    ///
    /// Inside [`with_culture`](crate::culture::with_culture) the task-local
    /// culture is used.
    pub async fn get_translation_async<'a, C>(
        &self,
        core: &'a C,
        language: Option<&str>,
    ) -> I18nResult<&'a C::Translation>
    where
        C: MultiLingualObject,
    {
        self.get_translation(core, language)
    }

    /// Resolve translations for many objects under one culture.
    ///
    /// Objects without an acceptable translation yield `None`; order is preserved.
    pub fn get_bulk_translations<'a, C, I>(
        &self,
        cores: I,
        language: Option<&str>,
    ) -> I18nResult<Vec<(&'a C, Option<&'a C::Translation>)>>
    where
        C: MultiLingualObject + 'a,
        I: IntoIterator<Item = &'a C>,
    {
        let request = Self::ambient_request(language);
        let settings = self.settings.get();
        let case_sensitive = settings.localization.case_sensitive;
        let candidates = Self::candidates(&request, &settings)?;

        let resolved: Vec<_> = cores
            .into_iter()
            .map(|core| {
                let found = candidates
                    .find(core.translations(), case_sensitive)
                    .map(|(translation, _)| translation);
                (core, found)
            })
            .collect();

        debug!(
            total = resolved.len(),
            missing = resolved.iter().filter(|(_, t)| t.is_none()).count(),
            "Resolved bulk translations"
        );
        Ok(resolved)
    }

    /// Resolve a translation from an explicit request, without touching ambient state
    pub fn resolve<'a, C>(
        &self,
        core: &'a C,
        request: &TranslationRequest,
    ) -> I18nResult<TranslationMatch<'a, C::Translation>>
    where
        C: MultiLingualObject,
    {
        let settings = self.settings.get();
        let candidates = Self::candidates(request, &settings)?;

        match candidates.find(core.translations(), settings.localization.case_sensitive) {
            Some((translation, candidate)) => {
                debug!(
                    core_id = %core.id(),
                    language = %candidate.language,
                    source = %candidate.source,
                    "Resolved translation"
                );
                Ok(TranslationMatch {
                    translation,
                    language: candidate.language.clone(),
                    source: candidate.source,
                })
            }
            None => {
                let attempted = candidates.attempted();
                debug!(
                    core_id = %core.id(),
                    available = core.translations().len(),
                    ?attempted,
                    "No translation matched"
                );
                Err(I18nError::TranslationNotFound {
                    core_id: core.id(),
                    attempted,
                })
            }
        }
    }

    fn ambient_request(language: Option<&str>) -> TranslationRequest {
        match language {
            Some(language) => TranslationRequest::new().language(language),
            None => TranslationRequest::new().with_culture_opt(current_culture()),
        }
    }

    fn candidates(request: &TranslationRequest, settings: &Config) -> I18nResult<CandidateList> {
        let localization = &settings.localization;
        let fallback = request
            .fallback_to_parent_cultures
            .unwrap_or(localization.fallback_to_parent_cultures);
        let mut candidates = CandidateList::default();

        if let Some(language) = request.language.as_deref() {
            let language = language.trim();
            if language.is_empty() {
                return Err(I18nError::InvalidArgument {
                    name: "language",
                    reason: "language tag must not be empty".to_string(),
                });
            }
            candidates.push(language, MatchSource::ExplicitLanguage);
            if fallback {
                // Tags outside BCP-47 still match exactly; they just have no parents.
                match Culture::new(language) {
                    Ok(culture) => candidates.push_ancestors(&culture),
                    Err(e) => debug!(language, error = %e, "Explicit language has no parent cultures"),
                }
            }
        } else if let Some(culture) = request.culture.as_ref() {
            candidates.push(culture.name(), MatchSource::CurrentCulture);
            if fallback {
                candidates.push_ancestors(culture);
            }
        } else {
            debug!(
                default_language = %localization.default_language,
                "No current culture set, using default language only"
            );
        }

        candidates.push(&localization.default_language, MatchSource::DefaultLanguage);
        Ok(candidates)
    }
}
