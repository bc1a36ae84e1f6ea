//! In-memory triple set with wildcard pattern queries.

use std::collections::HashSet;

use crate::term::{Term, Triple};

/// An unordered set of triples.
///
/// Inserting a triple that is already present is a no-op. Queries take an
/// `Option<&Term>` per position where `None` is a wildcard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    triples: Vec<Triple>,
    index: HashSet<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.index.contains(&triple) {
            return false;
        }
        self.index.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Convenience for `insert(Triple::new(s, p, o))`.
    pub fn add(&mut self, subject: Term, predicate: Term, object: Term) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// All triples matching the pattern.
    pub fn matching<'a>(
        &'a self,
        subject: Option<&'a Term>,
        predicate: Option<&'a Term>,
        object: Option<&'a Term>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| {
            subject.map_or(true, |s| &t.subject == s)
                && predicate.map_or(true, |p| &t.predicate == p)
                && object.map_or(true, |o| &t.object == o)
        })
    }

    /// Number of triples matching the pattern.
    pub fn count(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> usize {
        self.matching(subject, predicate, object).count()
    }

    /// Whether the exact triple is present.
    pub fn contains(&self, subject: &Term, predicate: &Term, object: &Term) -> bool {
        self.index.contains(&Triple::new(
            subject.clone(),
            predicate.clone(),
            object.clone(),
        ))
    }

    /// Objects of every `(subject, predicate, ?)` triple.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Term,
        predicate: &'a Term,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.matching(Some(subject), Some(predicate), None)
            .map(|t| &t.object)
    }

    /// Subjects of every `(?, predicate, object)` triple.
    pub fn subjects<'a>(
        &'a self,
        predicate: &'a Term,
        object: &'a Term,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.matching(None, Some(predicate), Some(object))
            .map(|t| &t.subject)
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
