//! RDF terms and triples.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single position in a triple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// An IRI.
    NamedNode(String),
    /// A blank node label (without the `_:` prefix).
    BlankNode(String),
    /// A literal with optional datatype IRI or language tag.
    Literal {
        value: String,
        datatype: Option<String>,
        language: Option<String>,
    },
}

impl Term {
    pub fn named(iri: impl Into<String>) -> Self {
        Self::NamedNode(iri.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Self::BlankNode(label.into())
    }

    /// A plain string literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// The lexical value: IRI, blank node label, or literal text.
    pub fn value(&self) -> &str {
        match self {
            Self::NamedNode(iri) => iri,
            Self::BlankNode(label) => label,
            Self::Literal { value, .. } => value,
        }
    }

    /// The IRI if this is a named node.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::NamedNode(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::NamedNode(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(iri) => write!(f, "<{iri}>"),
            Self::BlankNode(label) => write!(f, "_:{label}"),
            Self::Literal {
                value,
                datatype,
                language,
            } => {
                let escaped = value
                    .replace('\\', "\\\\")
                    .replace('"', "\\\"")
                    .replace('\n', "\\n")
                    .replace('\r', "\\r");
                write!(f, "\"{escaped}\"")?;
                if let Some(lang) = language {
                    write!(f, "@{lang}")
                } else if let Some(dt) = datatype {
                    write!(f, "^^<{dt}>")
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// A `(subject, predicate, object)` statement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_ignores_term_kind() {
        assert_eq!(Term::named("http://a").value(), "http://a");
        assert_eq!(Term::blank("b0").value(), "b0");
        assert_eq!(Term::literal("http://a").value(), "http://a");
    }

    #[test]
    fn literal_and_named_node_are_distinct() {
        assert_ne!(Term::named("http://a"), Term::literal("http://a"));
        assert_eq!(Term::literal("x").as_named(), None);
    }

    #[test]
    fn triple_displays_as_ntriples() {
        let triple = Triple::new(
            Term::named("http://example.com/group"),
            Term::named("http://www.w3.org/2006/vcard/ns#hasMember"),
            Term::Literal {
                value: "say \"hi\"".into(),
                datatype: None,
                language: Some("en".into()),
            },
        );
        assert_eq!(
            triple.to_string(),
            "<http://example.com/group> <http://www.w3.org/2006/vcard/ns#hasMember> \"say \\\"hi\\\"\"@en ."
        );
    }
}
