//! Fuzz target: token preview truncation.
//!
//! The preview must never panic on arbitrary input (including multibyte
//! char boundaries) and must never reveal more than the fixed prefix.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nexbridge_core::{token_preview, MASKED_PREVIEW, PREVIEW_LEN};

fuzz_target!(|data: &[u8]| {
    let token = String::from_utf8_lossy(data);
    let preview = token_preview(&token);

    if token.chars().count() <= PREVIEW_LEN {
        assert_eq!(preview, MASKED_PREVIEW, "short tokens must be fully masked");
    } else {
        assert!(preview.ends_with("..."), "long tokens must be truncated");
        assert_eq!(
            preview.chars().count(),
            PREVIEW_LEN + 3,
            "preview must reveal exactly the fixed prefix"
        );
    }
});
