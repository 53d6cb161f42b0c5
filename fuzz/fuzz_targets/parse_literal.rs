#![no_main]

use funcmap_core::Kind;
use funcmap_core::literal::parse_literal;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = parse_literal(s) {
            // Literals never produce sequences, and every parsed value is accepted by its own kind.
            assert_ne!(value.classify(), Kind::Sequence);
            assert!(value.clone().coerce_to(value.classify()).is_ok());
            assert!(value.coerce_to(Kind::Any).is_ok());
        }
    }
});
