//! Culture values and the ambient culture context
//!
//! The current culture is never process-global. It lives either in a tokio
//! task-local (see [`with_culture`]) or in a thread-local slot overridden by a
//! [`CultureScope`] guard. A task-local culture takes precedence over the
//! thread's scoped culture.

use crate::error::{I18nError, I18nResult};
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::trace;
use unic_langid::LanguageIdentifier;

/// A parsed language tag such as `en-US` or `zh-Hans`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    id: LanguageIdentifier,
    name: String,
}

impl Culture {
    /// Parse a culture from a language tag.
    ///
    /// The stored name is canonicalized, so `en-us` becomes `en-US`.
    pub fn new(tag: &str) -> I18nResult<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(I18nError::InvalidArgument {
                name: "culture",
                reason: "language tag must not be empty".to_string(),
            });
        }

        let id: LanguageIdentifier = tag
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(tag.to_string()))?;
        Ok(Self::from_identifier(id))
    }

    /// Wrap an already parsed identifier
    pub fn from_identifier(id: LanguageIdentifier) -> Self {
        let name = id.to_string();
        Self { id, name }
    }

    /// Canonical tag, e.g. `zh-Hans`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primary language subtag, e.g. `en` for `en-US`
    pub fn language(&self) -> &str {
        self.id.language.as_str()
    }

    /// The underlying identifier
    pub const fn language_identifier(&self) -> &LanguageIdentifier {
        &self.id
    }

    /// The next more neutral culture: variants, then region, then script are dropped.
    ///
    /// `zh-Hans-CN` → `zh-Hans` → `zh`; a bare language has no parent.
    pub fn parent(&self) -> Option<Self> {
        let mut parent = self.id.clone();
        if parent.variants().next().is_some() {
            parent.clear_variants();
        } else if parent.region.is_some() {
            parent.region = None;
        } else if parent.script.is_some() {
            parent.script = None;
        } else {
            return None;
        }
        Some(Self::from_identifier(parent))
    }

    /// Parents of this culture from most to least specific, excluding itself
    pub fn ancestors(&self) -> impl Iterator<Item = Self> {
        std::iter::successors(self.parent(), Self::parent)
    }

    /// Whether this culture has no region, script, or variants
    pub fn is_neutral(&self) -> bool {
        self.parent().is_none()
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Culture {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

tokio::task_local! {
    static TASK_CULTURE: Culture;
}

thread_local! {
    static THREAD_CULTURE: RefCell<Option<Culture>> = const { RefCell::new(None) };
}

/// The culture visible to the current task or thread, if any has been set
pub fn current_culture() -> Option<Culture> {
    TASK_CULTURE
        .try_with(Clone::clone)
        .ok()
        .or_else(|| THREAD_CULTURE.with(|slot| slot.borrow().clone()))
}

/// Run `future` with `culture` as its task-local current culture.
///
/// Other tasks, including ones running concurrently on the same thread, are
/// unaffected.
pub async fn with_culture<F>(culture: Culture, future: F) -> F::Output
where
    F: Future,
{
    TASK_CULTURE.scope(culture, future).await
}

/// Guard restoring the thread's previous culture when dropped
#[derive(Debug)]
#[must_use = "the previous culture is restored as soon as the scope is dropped"]
pub struct CultureScope {
    previous: Option<Culture>,
    // Bound to the thread whose slot it restores.
    _not_send: PhantomData<*const ()>,
}

impl Drop for CultureScope {
    fn drop(&mut self) {
        let previous = self.previous.take();
        trace!(restored = ?previous.as_ref().map(Culture::name), "Leaving culture scope");
        THREAD_CULTURE.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Scoped overrides of the current thread's culture
#[derive(Debug, Clone, Copy)]
pub struct CultureHelper;

impl CultureHelper {
    /// Parse `tag` and make it the thread's culture until the guard drops
    pub fn use_culture(tag: &str) -> I18nResult<CultureScope> {
        Ok(Self::scope(Culture::new(tag)?))
    }

    /// Make `culture` the thread's culture until the guard drops
    pub fn scope(culture: Culture) -> CultureScope {
        trace!(culture = %culture, "Entering culture scope");
        let previous = THREAD_CULTURE.with(|slot| slot.borrow_mut().replace(culture));
        CultureScope {
            previous,
            _not_send: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_culture_canonicalizes_name() {
        assert_eq!(Culture::new("en-us").unwrap().name(), "en-US");
        assert_eq!(Culture::new(" zh-hans ").unwrap().name(), "zh-Hans");
        assert_eq!(Culture::new("tr").unwrap().name(), "tr");
    }

    #[test]
    fn test_culture_rejects_bad_tags() {
        assert!(matches!(
            Culture::new(""),
            Err(I18nError::InvalidArgument { name: "culture", .. })
        ));
        assert!(matches!(
            Culture::new("not a culture"),
            Err(I18nError::InvalidLanguageId(_))
        ));
    }

    #[test]
    fn test_parent_chain() {
        let culture = Culture::new("zh-Hans-CN").unwrap();
        let chain: Vec<String> = culture.ancestors().map(|c| c.name().to_string()).collect();
        assert_eq!(chain, vec!["zh-Hans", "zh"]);

        assert_eq!(Culture::new("en-US").unwrap().parent().unwrap().name(), "en");
        assert!(Culture::new("tr").unwrap().parent().is_none());
        assert!(Culture::new("tr").unwrap().is_neutral());
        assert_eq!(Culture::new("en-US").unwrap().language(), "en");
    }

    #[test]
    fn test_scope_restores_previous_culture() {
        assert_eq!(current_culture(), None);
        {
            let _outer = CultureHelper::use_culture("zh-Hans").unwrap();
            assert_eq!(current_culture().unwrap().name(), "zh-Hans");
            {
                let _inner = CultureHelper::use_culture("en-US").unwrap();
                assert_eq!(current_culture().unwrap().name(), "en-US");
            }
            assert_eq!(current_culture().unwrap().name(), "zh-Hans");
        }
        assert_eq!(current_culture(), None);
    }

    #[test]
    fn test_invalid_scope_leaves_culture_untouched() {
        let _scope = CultureHelper::use_culture("tr").unwrap();
        assert!(CultureHelper::use_culture("???").is_err());
        assert_eq!(current_culture().unwrap().name(), "tr");
    }

    #[test]
    fn test_thread_scopes_are_isolated() {
        let _scope = CultureHelper::use_culture("zh-Hans").unwrap();
        let seen = std::thread::spawn(current_culture).join().unwrap();
        assert_eq!(seen, None);
    }

    #[test]
    fn test_task_culture_is_dropped_after_scope() {
        let seen = tokio_test::block_on(with_culture(Culture::new("tr").unwrap(), async {
            current_culture()
        }));
        assert_eq!(seen.unwrap().name(), "tr");
        assert_eq!(current_culture(), None);
    }

    #[tokio::test]
    async fn test_task_culture_overrides_thread_culture() {
        let _scope = CultureHelper::use_culture("en-US").unwrap();
        let inside = with_culture(Culture::new("zh-Hans").unwrap(), async {
            current_culture().map(|c| c.name().to_string())
        })
        .await;
        assert_eq!(inside.as_deref(), Some("zh-Hans"));
        assert_eq!(current_culture().unwrap().name(), "en-US");
    }
}
