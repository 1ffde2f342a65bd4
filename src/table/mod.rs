//! Telugu <-> WX symbol tables loaded from TOML.
//!
//! - `parse_table_toml(toml_str)` builds a validated [`WxTable`]
//! - `WxTable::init_custom(toml_content)` sets a custom TOML before first
//!   `global()` call
//! - `WxTable::global()` returns `&'static WxTable` (lazy-init singleton)
//! - Default tables are embedded via `include_str!("default_table.toml")`
//!
//! Tables are immutable after construction; every invariant the two
//! converters rely on (codes are ASCII, consonant codes end in the
//! inherent vowel, no Latin code claimed twice) is checked here and
//! nowhere else.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use crate::script;
use crate::trie::Trie;

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

/// The Latin letter every consonant code ends with. A consonant reads
/// with this short vowel unless a vowel sign or the virama overrides it.
pub const INHERENT_VOWEL: char = 'a';

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Deserialize)]
struct RawTable {
    vowels: BTreeMap<String, String>,
    signs: BTreeMap<String, String>,
    consonants: BTreeMap<String, String>,
    vowel_signs: BTreeMap<String, String>,
    digits: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptySection(&'static str),
    #[error("table key must be a single Telugu character: {0:?}")]
    BadKey(String),
    #[error("U+0C4D is the vowel-killer operator and cannot appear as a table key")]
    ViramaKey,
    #[error("code for {key} must be non-empty ASCII, got {code:?}")]
    BadCode { key: char, code: String },
    #[error("consonant code must end in the inherent vowel: {key} -> {code:?}")]
    BadConsonantCode { key: char, code: String },
    #[error("digit code must be a single ASCII digit: {key} -> {code:?}")]
    BadDigitCode { key: char, code: String },
    #[error("vowel sign {key} has code {code:?} with no matching independent vowel")]
    OrphanVowelSign { key: char, code: String },
    #[error("vowel sign {key} claims the inherent vowel, which has no written sign")]
    InherentVowelSign { key: char },
    #[error("{key} is mapped more than once")]
    DuplicateKey { key: char },
    #[error("code {code:?} is claimed by more than one character")]
    CodeCollision { code: String },
    #[error("wx table already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharKind {
    Vowel,
    Sign,
    Consonant,
    VowelSign,
    Digit,
}

#[derive(Debug)]
pub(crate) struct EncodeEntry {
    pub(crate) code: String,
    pub(crate) kind: CharKind,
}

/// A decoded unit of WX input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WxToken {
    /// Full consonant code, inherent vowel included ("ka").
    Consonant(char),
    /// Consonant code with the inherent vowel stripped ("k"). What follows
    /// decides between a vowel sign and a virama.
    ConsonantStem(char),
    Vowel {
        standalone: char,
        sign: Option<char>,
    },
    Sign(char),
}

#[derive(Debug)]
pub struct WxTable {
    pub(crate) encode_map: HashMap<char, EncodeEntry>,
    pub(crate) decode_trie: Trie<WxToken>,
    digits: [Option<char>; 10],
}

impl WxTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static WxTable {
        static INSTANCE: OnceLock<WxTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TABLE_TOML);
            parse_table_toml(toml_str).expect("wx table TOML must be valid")
        })
    }

    /// Telugu digit for an ASCII digit character, if mapped.
    pub(crate) fn digit_for(&self, ch: char) -> Option<char> {
        ch.to_digit(10).and_then(|d| self.digits[d as usize])
    }

    fn build(raw: RawTable) -> Result<WxTable, TableError> {
        for (name, section) in [
            ("vowels", &raw.vowels),
            ("signs", &raw.signs),
            ("consonants", &raw.consonants),
            ("vowel_signs", &raw.vowel_signs),
            ("digits", &raw.digits),
        ] {
            if section.is_empty() {
                return Err(TableError::EmptySection(name));
            }
        }

        let mut table = WxTable {
            encode_map: HashMap::new(),
            decode_trie: Trie::new(),
            digits: [None; 10],
        };

        // Vowel signs don't enter the trie on their own; each one rides on
        // the independent vowel sharing its code.
        let mut sign_for_code: HashMap<String, char> = HashMap::new();
        for (key, code) in &raw.vowel_signs {
            let key = parse_key(key)?;
            validate_code(key, code)?;
            if is_inherent_code(code) {
                return Err(TableError::InherentVowelSign { key });
            }
            if sign_for_code.insert(code.clone(), key).is_some() {
                return Err(TableError::CodeCollision { code: code.clone() });
            }
            table.insert_encode(key, code.clone(), CharKind::VowelSign)?;
        }

        for (key, code) in &raw.vowels {
            let key = parse_key(key)?;
            validate_code(key, code)?;
            let sign = sign_for_code.remove(code);
            table.insert_encode(key, code.clone(), CharKind::Vowel)?;
            table.insert_decode(
                code,
                WxToken::Vowel {
                    standalone: key,
                    sign,
                },
            )?;
        }
        if let Some((code, key)) = sign_for_code.into_iter().next() {
            return Err(TableError::OrphanVowelSign { key, code });
        }

        for (key, code) in &raw.signs {
            let key = parse_key(key)?;
            validate_code(key, code)?;
            table.insert_encode(key, code.clone(), CharKind::Sign)?;
            table.insert_decode(code, WxToken::Sign(key))?;
        }

        for (key, code) in &raw.consonants {
            let key = parse_key(key)?;
            validate_code(key, code)?;
            if code.len() < 2 || !code.ends_with(INHERENT_VOWEL) {
                return Err(TableError::BadConsonantCode {
                    key,
                    code: code.clone(),
                });
            }
            table.insert_encode(key, code.clone(), CharKind::Consonant)?;
            table.insert_decode(code, WxToken::Consonant(key))?;
            table.insert_decode(&code[..code.len() - 1], WxToken::ConsonantStem(key))?;
        }

        for (key, code) in &raw.digits {
            let key = parse_key(key)?;
            if code.len() != 1 || !code.as_bytes()[0].is_ascii_digit() {
                return Err(TableError::BadDigitCode {
                    key,
                    code: code.clone(),
                });
            }
            let slot = (code.as_bytes()[0] - b'0') as usize;
            if table.digits[slot].is_some() {
                return Err(TableError::CodeCollision { code: code.clone() });
            }
            table.digits[slot] = Some(key);
            table.insert_encode(key, code.clone(), CharKind::Digit)?;
        }

        debug!(
            chars = table.encode_map.len(),
            codes = table.decode_trie.len(),
            "wx table built"
        );
        Ok(table)
    }

    fn insert_encode(&mut self, key: char, code: String, kind: CharKind) -> Result<(), TableError> {
        if self
            .encode_map
            .insert(key, EncodeEntry { code, kind })
            .is_some()
        {
            return Err(TableError::DuplicateKey { key });
        }
        Ok(())
    }

    fn insert_decode(&mut self, code: &str, token: WxToken) -> Result<(), TableError> {
        if !self.decode_trie.insert(code.as_bytes(), token) {
            return Err(TableError::CodeCollision {
                code: code.to_string(),
            });
        }
        Ok(())
    }
}

/// Parse TOML text into a validated `WxTable`.
pub fn parse_table_toml(toml_str: &str) -> Result<WxTable, TableError> {
    let raw: RawTable =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;
    WxTable::build(raw)
}

fn parse_key(raw: &str) -> Result<char, TableError> {
    let mut chars = raw.chars();
    let (Some(key), None) = (chars.next(), chars.next()) else {
        return Err(TableError::BadKey(raw.to_string()));
    };
    if script::is_virama(key) {
        return Err(TableError::ViramaKey);
    }
    if !script::is_telugu(key) {
        return Err(TableError::BadKey(raw.to_string()));
    }
    Ok(key)
}

fn validate_code(key: char, code: &str) -> Result<(), TableError> {
    if code.is_empty() || !code.is_ascii() {
        return Err(TableError::BadCode {
            key,
            code: code.to_string(),
        });
    }
    Ok(())
}

fn is_inherent_code(code: &str) -> bool {
    code.len() == 1 && code.starts_with(INHERENT_VOWEL)
}
