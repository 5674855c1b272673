//! Puzzle chain data: authored link records and the validated chain.

use super::error::ChainError;
use serde::{Deserialize, Serialize};

/// Number of links in every daily chain.
pub const CHAIN_LENGTH: usize = 6;

/// Number of options offered on every link.
pub const OPTION_COUNT: usize = 4;

/// One link exactly as it arrives from the feed, before validation.
///
/// Accepts both the camelCase field names and the short names used by
/// hand-authored feeds (`answer`, `decoded`, `bridge`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    /// Clue text, first link only.
    #[serde(default)]
    pub category: Option<String>,
    /// Disguised spelling shown to the player.
    pub compressed: String,
    /// Options in display order.
    pub options: Vec<String>,
    /// The option that solves the link.
    #[serde(alias = "answer")]
    pub correct_option: String,
    /// The word behind the disguise.
    #[serde(alias = "decoded")]
    pub decoded_word: String,
    /// Connective text leading to the next link.
    #[serde(default, alias = "bridge")]
    pub bridge_hint: Option<String>,
    /// Decoration revealed with the decoded word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// A validated link. Only obtainable through [`PuzzleChain::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub(crate) category: Option<String>,
    pub(crate) compressed: String,
    pub(crate) options: Vec<String>,
    pub(crate) correct_option: String,
    pub(crate) decoded_word: String,
    pub(crate) bridge_hint: Option<String>,
    pub(crate) emoji: Option<String>,
}

impl Link {
    /// Clue text; only the first link has one.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Disguised spelling shown to the player.
    pub fn compressed(&self) -> &str {
        &self.compressed
    }

    /// All options in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The option that solves this link.
    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    /// The word behind the disguise.
    pub fn decoded_word(&self) -> &str {
        &self.decoded_word
    }

    /// Bridge text; absent on the final link.
    pub fn bridge_hint(&self) -> Option<&str> {
        self.bridge_hint.as_deref()
    }

    /// Optional decoration.
    pub fn emoji(&self) -> Option<&str> {
        self.emoji.as_deref()
    }

    /// Returns true if `option` is one of this link's options.
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

impl From<Link> for LinkRecord {
    fn from(link: Link) -> Self {
        Self {
            category: link.category,
            compressed: link.compressed,
            options: link.options,
            correct_option: link.correct_option,
            decoded_word: link.decoded_word,
            bridge_hint: link.bridge_hint,
            emoji: link.emoji,
        }
    }
}

/// Ordered, validated sequence of [`CHAIN_LENGTH`] links.
///
/// Serializes as a plain array of link records; deserializing runs the
/// loader, so a deserialized chain is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LinkRecord>", into = "Vec<LinkRecord>")]
pub struct PuzzleChain {
    pub(crate) links: Vec<Link>,
}

impl PuzzleChain {
    /// All links in order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The link at `index`, if in range.
    pub fn link(&self, index: usize) -> Option<&Link> {
        self.links.get(index)
    }

    /// Returns true if any link offers `option`.
    pub fn mentions(&self, option: &str) -> bool {
        self.links.iter().any(|link| link.offers(option))
    }
}

impl TryFrom<Vec<LinkRecord>> for PuzzleChain {
    type Error = ChainError;

    fn try_from(records: Vec<LinkRecord>) -> Result<Self, Self::Error> {
        Self::load(records)
    }
}

impl From<PuzzleChain> for Vec<LinkRecord> {
    fn from(chain: PuzzleChain) -> Self {
        chain.links.into_iter().map(LinkRecord::from).collect()
    }
}
