#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Group documents come from arbitrary remote servers. Parsing must never
    // panic, whatever the bytes.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(graph) = grouptrust_groups::ntriples::parse(text) {
            for triple in graph.iter() {
                assert!(!triple.to_string().is_empty());
            }
        }
    }
});
