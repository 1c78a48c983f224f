//! # Canonical Location Tags
//!
//! Free-text location strings ("Gurugram & Noida", "remote / gurgaon") are
//! reduced to sets of canonical [`Tag`]s before any matching happens. The
//! reduction is driven by a [`TagTable`], a synonym map from lowercase
//! fragments to one or more canonical tags, so deployments with a
//! different location vocabulary swap the table, not the code.
//!
//! ## Matching is strict
//!
//! A fragment the table does not recognize is discarded. Callers that need
//! "unrecognized query means no filter" semantics test the resulting set
//! for emptiness (see [`crate::filter`]).
//!
//! ## Compound synonyms
//!
//! A synonym may expand to several tags: the default table maps
//! `gurgaon_noida` to `{gurgaon, noida}`, so a record carrying the compound
//! form matches both a `gurgaon` and a `noida` query through ordinary set
//! intersection.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical location tag.
///
/// Always lowercase; construction normalizes case and surrounding
/// whitespace. Equality and ordering are plain string semantics, so tags
/// collect naturally into a `BTreeSet`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Create a tag, lowercasing and trimming the input.
    pub fn new(value: impl AsRef<str>) -> Self {
        Tag(value.as_ref().trim().to_lowercase())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::new(value)
    }
}

/// Synonym table mapping lowercase fragments to canonical tags.
///
/// The table is the single parameterization point for the canonicalizer:
/// every deployment-specific vocabulary difference (extra synonyms,
/// compound entries, a different city set) is a table difference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagTable {
    synonyms: BTreeMap<String, Vec<Tag>>,
}

impl TagTable {
    /// An empty table. [`TagTable::canonicalize`] on an empty table always
    /// yields the empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The default table for the NCR directory vocabulary.
    ///
    /// | Synonym | Tags |
    /// |---|---|
    /// | `gurgaon` | `gurgaon` |
    /// | `gurugram` | `gurgaon` |
    /// | `noida` | `noida` |
    /// | `remote` | `remote` |
    /// | `gurgaon_noida` | `gurgaon`, `noida` |
    pub fn ncr() -> Self {
        let mut table = Self::empty();
        table.insert("gurgaon", ["gurgaon"]);
        table.insert("gurugram", ["gurgaon"]);
        table.insert("noida", ["noida"]);
        table.insert("remote", ["remote"]);
        table.insert("gurgaon_noida", ["gurgaon", "noida"]);
        table
    }

    /// Add a synonym entry. The synonym and all tags are normalized to
    /// lowercase; inserting the same synonym again replaces its entry.
    pub fn insert<I, T>(&mut self, synonym: impl AsRef<str>, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let tags: Vec<Tag> = tags.into_iter().map(Tag::new).collect();
        self.synonyms
            .insert(synonym.as_ref().trim().to_lowercase(), tags);
    }

    /// The set of all canonical tags this table can produce.
    pub fn canonical_tags(&self) -> BTreeSet<Tag> {
        self.synonyms.values().flatten().cloned().collect()
    }

    /// Reduce a free-text location or query string to its canonical tag set.
    ///
    /// Splits the input on commas, slashes, semicolons, ampersands, and the
    /// standalone word "and", then maps each fragment through the synonym
    /// table. A fragment that is not a synonym but is itself a canonical
    /// tag value resolves to itself. Anything else is discarded.
    ///
    /// Empty or whitespace-only input yields the empty set, as does input
    /// containing only unrecognized fragments; callers must treat an empty
    /// set from a *query* as "no filter", never as "match nothing".
    pub fn canonicalize(&self, input: &str) -> BTreeSet<Tag> {
        let canonical = self.canonical_tags();
        let mut tags = BTreeSet::new();
        for term in split_terms(input) {
            if let Some(mapped) = self.synonyms.get(&term) {
                tags.extend(mapped.iter().cloned());
            } else {
                let candidate = Tag(term);
                if canonical.contains(&candidate) {
                    tags.insert(candidate);
                }
            }
        }
        tags
    }
}

/// Split a location string into lowercase fragments.
///
/// Separators are `,` `/` `;`, the ampersand (rewritten to "and"), and the
/// standalone word "and". The word match is whole-token only: "android"
/// survives intact. Fragments are trimmed; empty fragments are dropped.
pub fn split_terms(input: &str) -> Vec<String> {
    let lowered = input.to_lowercase().replace('&', " and ");
    let mut terms = Vec::new();
    for piece in lowered.split([',', '/', ';']) {
        let mut words: Vec<&str> = Vec::new();
        for word in piece.split_whitespace() {
            if word == "and" {
                flush_term(&mut terms, &mut words);
            } else {
                words.push(word);
            }
        }
        flush_term(&mut terms, &mut words);
    }
    terms
}

fn flush_term(terms: &mut Vec<String>, words: &mut Vec<&str>) {
    if !words.is_empty() {
        terms.push(words.join(" "));
        words.clear();
    }
}
