#![no_main]

use grouptrust_types::WebId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let web_id = WebId::new(data);
    let document = web_id.document_url();

    // The document is a prefix without a fragment marker.
    assert!(data.starts_with(document));
    assert!(!document.contains('#'));
    let _ = web_id.is_valid();
});
