//! WX to Telugu decoding.
//!
//! Longest-match scanning over the merged code trie. A consonant code
//! seen without its inherent vowel ("k") is completed by whatever
//! follows: a vowel code becomes the written vowel sign, anything else
//! re-inserts the virama the encoder consumed.

use tracing::debug_span;

use crate::script::VIRAMA;
use crate::table::{WxTable, WxToken};

impl WxTable {
    /// Transliterate WX notation back to Telugu text.
    ///
    /// Total over arbitrary input: substrings matching no code pass
    /// through unchanged, with single ASCII digits going through the
    /// digit table. Longest match wins at every position.
    pub fn decode(&self, wx: &str) -> String {
        let _span = debug_span!("decode", bytes = wx.len()).entered();
        let bytes = wx.as_bytes();
        let mut out = String::with_capacity(wx.len() * 3);
        let mut i = 0;
        while i < bytes.len() {
            let Some((len, token)) = self.decode_trie.longest_match(&bytes[i..]) else {
                // Codes are pure ASCII, so `i` always sits on a char boundary.
                let ch = wx[i..].chars().next().expect("cursor within input");
                out.push(self.digit_for(ch).unwrap_or(ch));
                i += ch.len_utf8();
                continue;
            };
            i += len;
            match *token {
                WxToken::Consonant(c) => out.push(c),
                WxToken::ConsonantStem(c) => {
                    out.push(c);
                    match self.decode_trie.longest_match(&bytes[i..]) {
                        Some((
                            vlen,
                            WxToken::Vowel {
                                sign: Some(sign), ..
                            },
                        )) => {
                            out.push(*sign);
                            i += vlen;
                        }
                        _ => out.push(VIRAMA),
                    }
                }
                WxToken::Vowel { standalone, .. } => out.push(standalone),
                WxToken::Sign(c) => out.push(c),
            }
        }
        out
    }
}

/// Decode with the process-wide default table.
pub fn decode(wx: &str) -> String {
    WxTable::global().decode(wx)
}

#[cfg(test)]
mod tests {
    use super::decode;

    #[test]
    fn test_empty() {
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_full_consonant_code() {
        assert_eq!(decode("ka"), "క");
    }

    #[test]
    fn test_bare_stem_reinserts_virama() {
        assert_eq!(decode("k"), "క్");
    }

    #[test]
    fn test_stem_plus_vowel_becomes_sign() {
        assert_eq!(decode("ki"), "కి");
        assert_eq!(decode("kA"), "కా");
        assert_eq!(decode("kq"), "కృ");
    }

    #[test]
    fn test_longest_match_wins() {
        // "eV" is the short vowel, never 'e' plus a stray 'V'
        assert_eq!(decode("eV"), "ఎ");
        assert_eq!(decode("keV"), "కె");
        assert_eq!(decode("e"), "ఏ");
    }

    #[test]
    fn test_vowel_after_full_code_is_independent() {
        assert_eq!(decode("kai"), "కఇ");
        assert_eq!(decode("a"), "అ");
    }

    #[test]
    fn test_three_letter_code() {
        assert_eq!(decode("rYa"), "ఱ");
        assert_eq!(decode("rYi"), "ఱి");
        assert_eq!(decode("ra"), "ర");
    }

    #[test]
    fn test_signs() {
        assert_eq!(decode("kaM"), "కం");
        assert_eq!(decode("kM"), "క్ం");
        assert_eq!(decode("M"), "ం");
    }

    #[test]
    fn test_digits() {
        assert_eq!(decode("5"), "౫");
        assert_eq!(decode("1982"), "౧౯౮౨");
    }

    #[test]
    fn test_clusters() {
        assert_eq!(decode("kRa"), "క్ష");
        assert_eq!(decode("kka"), "క్క");
    }

    #[test]
    fn test_word() {
        assert_eq!(decode("xakRiNamaXya"), "దక్షిణమధ్య");
    }

    #[test]
    fn test_unmatched_passthrough() {
        assert_eq!(decode("V"), "V");
        assert_eq!(decode(", !"), ", !");
        assert_eq!(decode("క"), "క");
    }

    #[test]
    fn test_latin_collisions_decode_as_codes() {
        // Latin text sharing letters with WX codes is read as WX; the
        // ambiguity is accepted, round-tripping is only promised for
        // encoder output.
        assert_eq!(decode("hello"), "హేల్లో");
    }
}
