//! Match Capability
//!
//! Decides whether an item still belongs to a narrowed frame for a given token.
//! The cache relies on matchers being monotone: an item matching a token also
//! matches every prefix of that token. Substring containment satisfies this.

use std::borrow::Cow;
use std::marker::PhantomData;

/// Item-matches-token capability
pub trait Matcher<T> {
    fn matches(&self, item: &T, token: &str) -> bool;

    /// Token in the form [`matches_prepared`](Self::matches_prepared) expects.
    ///
    /// Called once per narrow step, before the pool is scanned.
    fn prepare_token<'a>(&self, token: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(token)
    }

    /// Match against a token already passed through [`prepare_token`](Self::prepare_token).
    fn matches_prepared(&self, item: &T, prepared: &str) -> bool {
        self.matches(item, prepared)
    }
}

impl<T, F> Matcher<T> for F
where
    F: Fn(&T, &str) -> bool,
{
    fn matches(&self, item: &T, token: &str) -> bool {
        self(item, token)
    }
}

/// Substring containment over items that are themselves text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contains {
    case_sensitive: bool,
}

impl Default for Contains {
    fn default() -> Self {
        Self::new()
    }
}

impl Contains {
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
        }
    }

    /// Compare after per-character lowercase folding of both item and token
    pub fn case_insensitive() -> Self {
        Self {
            case_sensitive: false,
        }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl<T: AsRef<str>> Matcher<T> for Contains {
    fn matches(&self, item: &T, token: &str) -> bool {
        self.matches_prepared(item, &Matcher::<T>::prepare_token(self, token))
    }

    fn prepare_token<'a>(&self, token: &'a str) -> Cow<'a, str> {
        prepare(token, self.case_sensitive)
    }

    fn matches_prepared(&self, item: &T, prepared: &str) -> bool {
        text_contains(item.as_ref(), prepared, self.case_sensitive)
    }
}

/// Substring containment over text extracted from structured items
pub struct TextOf<F, S> {
    extract: F,
    case_sensitive: bool,
    _text: PhantomData<fn() -> S>,
}

impl<F, S> TextOf<F, S> {
    pub fn new(extract: F) -> Self {
        Self {
            extract,
            case_sensitive: true,
            _text: PhantomData,
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }
}

impl<F: Clone, S> Clone for TextOf<F, S> {
    fn clone(&self) -> Self {
        Self {
            extract: self.extract.clone(),
            case_sensitive: self.case_sensitive,
            _text: PhantomData,
        }
    }
}

impl<F, S> std::fmt::Debug for TextOf<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextOf")
            .field("case_sensitive", &self.case_sensitive)
            .finish_non_exhaustive()
    }
}

impl<T, F, S> Matcher<T> for TextOf<F, S>
where
    F: Fn(&T) -> S,
    S: AsRef<str>,
{
    fn matches(&self, item: &T, token: &str) -> bool {
        self.matches_prepared(item, &Matcher::<T>::prepare_token(self, token))
    }

    fn prepare_token<'a>(&self, token: &'a str) -> Cow<'a, str> {
        prepare(token, self.case_sensitive)
    }

    fn matches_prepared(&self, item: &T, prepared: &str) -> bool {
        let text = (self.extract)(item);
        text_contains(text.as_ref(), prepared, self.case_sensitive)
    }
}

/// Lowercase one character at a time.
///
/// `str::to_lowercase` maps a word-final `Σ` to `ς`, so the folding of a prefix
/// would not always be a prefix of the folding of the whole query. A per-char
/// mapping keeps containment monotone under extension.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

fn prepare(token: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(fold_case(token))
    }
}

/// `needle` must already be folded when matching case-insensitively.
fn text_contains(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        haystack.contains(needle)
    } else {
        fold_case(haystack).contains(needle)
    }
}
