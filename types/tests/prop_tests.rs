use proptest::prelude::*;

use grouptrust_types::{Graph, Term, Triple, WebId};

proptest! {
    /// document_url never contains a fragment marker.
    #[test]
    fn document_url_has_no_fragment(path in "[a-z/]{0,20}", frag in "[a-z#]{0,10}") {
        let web_id = WebId::new(format!("http://example.com/{path}#{frag}"));
        prop_assert!(!web_id.document_url().contains('#'));
        prop_assert_eq!(web_id.document_url(), format!("http://example.com/{path}"));
    }

    /// document_url is idempotent.
    #[test]
    fn document_url_idempotent(raw in "[a-z:/#.]{0,40}") {
        let web_id = WebId::new(raw);
        let doc = WebId::new(web_id.document_url());
        prop_assert_eq!(doc.document_url(), web_id.document_url());
    }

    /// A URI without a fragment is its own document.
    #[test]
    fn unfragmented_uri_is_own_document(path in "[a-z0-9/]{0,30}") {
        let raw = format!("https://pod.example/{path}");
        let web_id = WebId::new(raw.clone());
        prop_assert_eq!(web_id.document_url(), raw.as_str());
    }

    /// Graph size never exceeds the number of distinct triples inserted.
    #[test]
    fn graph_has_set_semantics(objects in prop::collection::vec(0u8..8, 0..40)) {
        let graph: Graph = objects
            .iter()
            .map(|o| Triple::new(
                Term::named("http://example.com/group"),
                Term::named("http://www.w3.org/2006/vcard/ns#hasMember"),
                Term::named(format!("http://example.com/{o}")),
            ))
            .collect();
        let distinct: std::collections::HashSet<u8> = objects.iter().copied().collect();
        prop_assert_eq!(graph.len(), distinct.len());
    }
}
