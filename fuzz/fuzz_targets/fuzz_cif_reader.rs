#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Malformed files must come back as errors, never panics
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(doc) = cifcte::cif::CifDocument::parse(text) {
        for (_tag, value) in doc.iter() {
            for item in value.values() {
                let _ = cifcte::cif::parse_number(item);
            }
        }
        let _ = cifcte::structure::Structure::from_cif(&doc);
    }
});
