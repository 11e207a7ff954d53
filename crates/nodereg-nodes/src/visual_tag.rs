//! Default icon/color hint shown for a node type in the editor.

use serde::{Deserialize, Serialize};

const PALETTE: &[&str] = &[
    "#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF", "#E2BAFF", "#FFBAF2", "#C9C9FF",
    "#B5EAD7", "#FFDAC1", "#E2F0CB", "#C7CEEA",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualTag {
    pub acronym: String,
    pub color: String,
}

impl VisualTag {
    /// Acronym from the initials of the snake-case implementation name,
    /// color picked from a fixed palette by a stable hash of the class name.
    pub fn derive(implementation_name: &str, class_name: &str) -> Self {
        let acronym: String = implementation_name
            .split('_')
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase();
        let index = (fnv1a(class_name.as_bytes()) % PALETTE.len() as u64) as usize;
        Self {
            acronym,
            color: PALETTE[index].to_string(),
        }
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}
