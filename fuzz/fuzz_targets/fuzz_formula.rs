#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(composition) = cifcte::normalize::Composition::parse(text) {
        // A rendered composition must parse again
        let rendered = composition.to_string();
        assert!(cifcte::normalize::Composition::parse(&rendered).is_ok());
    }
    let _ = cifcte::normalize::normalize_spacegroup(text);
});
