use std::collections::HashSet;

use crate::Article;

/// Minimal shape the duplicate detector needs: a DOI, possibly absent.
pub trait DoiRecord {
    fn doi(&self) -> Option<&str>;
}

impl DoiRecord for Article {
    fn doi(&self) -> Option<&str> {
        self.doi.as_deref()
    }
}

impl<T: DoiRecord + ?Sized> DoiRecord for &T {
    fn doi(&self) -> Option<&str> {
        (**self).doi()
    }
}

/// Returns true as soon as two records share a DOI.
///
/// Comparison is exact and case-sensitive. An absent DOI is a value of its
/// own, so two records without a DOI count as duplicates.
pub fn has_duplicate_doi<R, I>(records: I) -> bool
where
    R: DoiRecord,
    I: IntoIterator<Item = R>,
{
    let mut seen: HashSet<Option<String>> = HashSet::new();
    for record in records {
        if !seen.insert(record.doi().map(ToOwned::to_owned)) {
            return true;
        }
    }
    false
}

/// Every repeated DOI, once each, in the order the first repeat was seen.
pub fn duplicate_dois<R, I>(records: I) -> Vec<Option<String>>
where
    R: DoiRecord,
    I: IntoIterator<Item = R>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut repeats = Vec::new();
    for record in records {
        let doi = record.doi().map(ToOwned::to_owned);
        if !seen.insert(doi.clone()) && reported.insert(doi.clone()) {
            repeats.push(doi);
        }
    }
    repeats
}
