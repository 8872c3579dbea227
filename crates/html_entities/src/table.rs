use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Deserialize;

use crate::error::TableError;

#[cfg(feature = "bundled")]
const BUNDLED_JSON: &str = include_str!("../data/entities.json");

/// Longest expansion of any named reference in the WHATWG list.
const MAX_CODEPOINTS: usize = 2;

#[derive(Deserialize)]
struct EntityRecord {
    name: String,
    codepoints: Vec<u32>,
}

/// Immutable mapping between named character references and the text they stand for.
///
/// Built once and shared by reference with [`decode_html_entities`](crate::decode_html_entities)
/// and [`encode_html_entities`](crate::encode_html_entities). Names are stored without the
/// leading `&` and trailing `;`.
///
/// Several names may expand to the same character (`amp` and `AMP`). The first record that
/// names a single-code-point character in the source is that character's canonical name,
/// which is what the encoder emits.
#[derive(Clone, Debug)]
pub struct EntityTable {
    by_name: HashMap<Box<str>, Box<str>>,
    by_char: HashMap<char, Box<str>>,
    max_name_len: usize,
}

impl EntityTable {
    /// Parse the table embedded in the crate (`data/entities.json`).
    #[cfg(feature = "bundled")]
    pub fn bundled() -> Result<Self, TableError> {
        Self::from_json(BUNDLED_JSON)
    }

    /// Parse and validate a JSON array of `{"name": ..., "codepoints": [...]}` records.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let records: Vec<EntityRecord> = serde_json::from_str(json)?;
        if records.is_empty() {
            return Err(TableError::Empty);
        }

        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_char = HashMap::new();
        let mut max_name_len = 0;

        for (index, record) in records.into_iter().enumerate() {
            let EntityRecord { name, codepoints } = record;
            if name.is_empty() {
                return Err(TableError::EmptyName { index });
            }
            if !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(TableError::InvalidName { name });
            }
            let Some(text) = expand_codepoints(&codepoints) else {
                return Err(TableError::InvalidCodepoints { name });
            };

            let mut chars = text.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                by_char.entry(ch).or_insert_with(|| name.clone().into_boxed_str());
            }

            max_name_len = max_name_len.max(name.len());
            match by_name.entry(name.into_boxed_str()) {
                Entry::Occupied(slot) => {
                    return Err(TableError::DuplicateName {
                        name: slot.key().to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(text.into_boxed_str());
                }
            }
        }

        log::debug!(
            target: "html_entities.table",
            "loaded {} named references ({} encodable characters, longest name {})",
            by_name.len(),
            by_char.len(),
            max_name_len
        );

        Ok(Self {
            by_name,
            by_char,
            max_name_len,
        })
    }

    /// Replacement text for a reference name, e.g. `"eacute"` -> `"é"`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(|text| &**text)
    }

    /// Canonical reference name for a character, e.g. `'é'` -> `"eacute"`.
    pub fn name_for(&self, ch: char) -> Option<&str> {
        self.by_char.get(&ch).map(|name| &**name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Byte length of the longest name; bounds the decoder's named-reference scan.
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// All reference names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_name.keys().map(|name| &**name)
    }

    /// Every character with a canonical name, paired with that name.
    pub fn encodable(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.by_char.iter().map(|(ch, name)| (*ch, &**name))
    }
}

fn expand_codepoints(codepoints: &[u32]) -> Option<String> {
    if codepoints.is_empty() || codepoints.len() > MAX_CODEPOINTS {
        return None;
    }
    codepoints.iter().map(|&cp| char::from_u32(cp)).collect()
}
