//! Line-based N-Triples reader.
//!
//! Group documents are requested as `application/n-triples`, which keeps the
//! reader small: one statement per line, absolute IRIs only, no prefixes.

use grouptrust_types::{Graph, Term, Triple};

use crate::FetchError;

/// Parse an N-Triples document into a graph.
pub fn parse(input: &str) -> Result<Graph, FetchError> {
    let mut graph = Graph::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let mut cursor = Cursor::new(raw);
        cursor.skip_ws();
        if cursor.at_end() || cursor.peek() == Some('#') {
            continue;
        }
        let triple = parse_statement(&mut cursor).map_err(|reason| FetchError::Parse { line, reason })?;
        graph.insert(triple);
    }
    Ok(graph)
}

fn parse_statement(cursor: &mut Cursor<'_>) -> Result<Triple, String> {
    let subject = match cursor.peek() {
        Some('<') => Term::NamedNode(cursor.iri()?),
        Some('_') => Term::BlankNode(cursor.blank_node()?),
        other => return Err(format!("expected subject, found {}", describe(other))),
    };
    cursor.skip_ws();
    let predicate = match cursor.peek() {
        Some('<') => Term::NamedNode(cursor.iri()?),
        other => return Err(format!("expected predicate IRI, found {}", describe(other))),
    };
    cursor.skip_ws();
    let object = match cursor.peek() {
        Some('<') => Term::NamedNode(cursor.iri()?),
        Some('_') => Term::BlankNode(cursor.blank_node()?),
        Some('"') => cursor.literal()?,
        other => return Err(format!("expected object, found {}", describe(other))),
    };
    cursor.skip_ws();
    cursor.expect('.')?;
    cursor.skip_ws();
    match cursor.peek() {
        None | Some('#') => Ok(Triple::new(subject, predicate, object)),
        other => Err(format!("unexpected {} after statement", describe(other))),
    }
}

fn describe(c: Option<char>) -> String {
    match c {
        Some(c) => format!("{c:?}"),
        None => "end of line".to_string(),
    }
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.rest.is_empty()
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start_matches([' ', '\t', '\r']);
    }

    fn expect(&mut self, want: char) -> Result<(), String> {
        match self.bump() {
            Some(c) if c == want => Ok(()),
            other => Err(format!("expected {want:?}, found {}", describe(other))),
        }
    }

    fn iri(&mut self) -> Result<String, String> {
        self.expect('<')?;
        let mut iri = String::new();
        loop {
            match self.bump() {
                Some('>') => break,
                Some('\\') => iri.push(self.unicode_escape()?),
                Some(c) if c.is_whitespace() || matches!(c, '<' | '"' | '{' | '}' | '|' | '^' | '`') => {
                    return Err(format!("invalid character {c:?} in IRI"));
                }
                Some(c) => iri.push(c),
                None => return Err("unterminated IRI".to_string()),
            }
        }
        if !iri.contains(':') {
            return Err(format!("relative IRI <{iri}> is not allowed"));
        }
        Ok(iri)
    }

    fn blank_node(&mut self) -> Result<String, String> {
        self.expect('_')?;
        self.expect(':')?;
        let end = self
            .rest
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '-' | '.')))
            .unwrap_or(self.rest.len());
        // A trailing '.' terminates the statement rather than the label.
        let label = self.rest[..end].trim_end_matches('.');
        if label.is_empty() {
            return Err("empty blank node label".to_string());
        }
        let label = label.to_string();
        self.rest = &self.rest[label.len()..];
        Ok(label)
    }

    fn literal(&mut self) -> Result<Term, String> {
        self.expect('"')?;
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => break,
                Some('\\') => value.push(self.string_escape()?),
                Some(c) => value.push(c),
                None => return Err("unterminated literal".to_string()),
            }
        }
        match self.peek() {
            Some('@') => {
                self.bump();
                let end = self
                    .rest
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                    .unwrap_or(self.rest.len());
                if end == 0 {
                    return Err("empty language tag".to_string());
                }
                let language = self.rest[..end].to_string();
                self.rest = &self.rest[end..];
                Ok(Term::Literal {
                    value,
                    datatype: None,
                    language: Some(language),
                })
            }
            Some('^') => {
                self.expect('^')?;
                self.expect('^')?;
                let datatype = self.iri()?;
                Ok(Term::Literal {
                    value,
                    datatype: Some(datatype),
                    language: None,
                })
            }
            _ => Ok(Term::Literal {
                value,
                datatype: None,
                language: None,
            }),
        }
    }

    fn string_escape(&mut self) -> Result<char, String> {
        match self.peek() {
            Some('u') | Some('U') => self.unicode_escape(),
            _ => match self.bump() {
                Some('t') => Ok('\t'),
                Some('b') => Ok('\u{8}'),
                Some('n') => Ok('\n'),
                Some('r') => Ok('\r'),
                Some('f') => Ok('\u{c}'),
                Some('"') => Ok('"'),
                Some('\'') => Ok('\''),
                Some('\\') => Ok('\\'),
                other => Err(format!("invalid escape {}", describe(other))),
            },
        }
    }

    fn unicode_escape(&mut self) -> Result<char, String> {
        let len = match self.bump() {
            Some('u') => 4,
            Some('U') => 8,
            other => return Err(format!("invalid escape {}", describe(other))),
        };
        let hex = self
            .rest
            .get(..len)
            .ok_or_else(|| "truncated unicode escape".to_string())?;
        let code = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid unicode escape {hex:?}"))?;
        self.rest = &self.rest[len..];
        char::from_u32(code).ok_or_else(|| format!("invalid code point U+{code:X}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouptrust_types::vocab;

    #[test]
    fn parses_group_document() {
        let doc = format!(
            "# group document\n\
             <http://example.com/group> <{issuer}> <http://example.com/> .\n\
             \n\
             <http://example.com/group> <{member}> <http://example.com/webID> . # alice\n",
            issuer = vocab::SOLID_OIDC_ISSUER,
            member = vocab::VCARD_HAS_MEMBER,
        );
        let graph = parse(&doc).unwrap();
        assert_eq!(graph.len(), 2);
        assert!(graph.contains(
            &Term::named("http://example.com/group"),
            &Term::named(vocab::VCARD_HAS_MEMBER),
            &Term::named("http://example.com/webID"),
        ));
    }

    #[test]
    fn parses_literals_and_blank_nodes() {
        let doc = "_:b0 <http://example.com/p> \"a \\\"quoted\\\" \\u00e9\"@fr-CA .\n\
                   _:b0 <http://example.com/q> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer>.\n";
        let graph = parse(doc).unwrap();
        let triples: Vec<&Triple> = graph.iter().collect();
        assert_eq!(triples[0].subject, Term::blank("b0"));
        assert_eq!(
            triples[0].object,
            Term::Literal {
                value: "a \"quoted\" é".into(),
                datatype: None,
                language: Some("fr-CA".into()),
            }
        );
        assert_eq!(
            triples[1].object,
            Term::Literal {
                value: "42".into(),
                datatype: Some("http://www.w3.org/2001/XMLSchema#integer".into()),
                language: None,
            }
        );
    }

    #[test]
    fn blank_node_label_before_dot() {
        let graph = parse("<http://a.example/s> <http://a.example/p> _:o1.\n").unwrap();
        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.object, Term::blank("o1"));
    }

    #[test]
    fn rejects_missing_terminator() {
        let err = parse("<http://a.example/s> <http://a.example/p> <http://a.example/o>\n").unwrap_err();
        assert!(matches!(err, FetchError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_turtle_prefixes() {
        let err = parse("@prefix vcard: <http://www.w3.org/2006/vcard/ns#> .\n").unwrap_err();
        assert!(matches!(err, FetchError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_relative_iri_with_line_number() {
        let doc = "<http://a.example/s> <http://a.example/p> <http://a.example/o> .\n\
                   <#me> <http://a.example/p> <http://a.example/o> .\n";
        let err = parse(doc).unwrap_err();
        assert!(matches!(err, FetchError::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_literal_predicate() {
        assert!(parse("<http://a.example/s> \"p\" <http://a.example/o> .").is_err());
    }

    #[test]
    fn empty_document_is_empty_graph() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n# nothing here\n").unwrap().is_empty());
    }
}
