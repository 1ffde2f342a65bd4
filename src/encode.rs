//! Telugu to WX encoding.
//!
//! A single left-to-right pass: every mapped character emits its code
//! immediately, except that the virama and the vowel signs cancel the
//! inherent vowel of the code emitted just before them.

use tracing::debug_span;

use crate::script;
use crate::table::{CharKind, WxTable, INHERENT_VOWEL};

impl WxTable {
    /// Transliterate Telugu text to WX notation.
    ///
    /// Total over arbitrary input: characters outside the tables pass
    /// through unchanged, and a virama with nothing to cancel is a no-op.
    pub fn encode(&self, text: &str) -> String {
        let _span = debug_span!("encode", bytes = text.len()).entered();
        let mut out = String::with_capacity(text.len());
        // Whether the most recently emitted code ends in the inherent
        // vowel. Only that one trailing letter is ever cancelled; a code
        // shortened once cannot be shortened again.
        let mut inherent_pending = false;
        for ch in text.chars() {
            if script::is_virama(ch) {
                if inherent_pending {
                    out.pop();
                    inherent_pending = false;
                }
                continue;
            }
            match self.encode_map.get(&ch) {
                Some(entry) => {
                    if entry.kind == CharKind::VowelSign && inherent_pending {
                        out.pop();
                    }
                    out.push_str(&entry.code);
                    inherent_pending = entry.code.ends_with(INHERENT_VOWEL);
                }
                None => {
                    out.push(ch);
                    inherent_pending = ch == INHERENT_VOWEL;
                }
            }
        }
        out
    }
}

/// Encode with the process-wide default table.
pub fn encode(text: &str) -> String {
    WxTable::global().encode(text)
}
