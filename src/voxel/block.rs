//! Block data type

use serde::{Deserialize, Serialize};

/// Well-known block type ids
pub mod ids {
    pub const AIR: u16 = 0;
    pub const STONE: u16 = 1;
    pub const GRASS: u16 = 2;
    pub const DIRT: u16 = 3;
    pub const COBBLESTONE: u16 = 4;
    pub const PLANKS: u16 = 5;
    pub const GLASS: u16 = 20;
}

/// Single block - type id plus per-type data value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Block type id (0 = air)
    pub id: u16,
    /// Type-specific data (orientation, color, ...)
    #[serde(default)]
    pub data: u8,
}

impl Block {
    /// Empty/air block
    pub const AIR: Block = Block { id: ids::AIR, data: 0 };

    /// Create block of the given type with zero data
    pub const fn new(id: u16) -> Self {
        Self { id, data: 0 }
    }

    /// Create block with explicit data value
    pub const fn with_data(id: u16, data: u8) -> Self {
        Self { id, data }
    }

    /// Check if block is air
    pub fn is_air(&self) -> bool {
        self.id == ids::AIR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air() {
        assert!(Block::AIR.is_air());
        assert!(Block::default().is_air());
        assert!(!Block::new(ids::STONE).is_air());
    }

    #[test]
    fn test_deserialize_without_data() {
        let block: Block = serde_json::from_str(r#"{ "id": 4 }"#).unwrap();
        assert_eq!(block, Block::new(ids::COBBLESTONE));
    }

    #[test]
    fn test_data_distinguishes_blocks() {
        let oak = Block::new(ids::PLANKS);
        let spruce = Block::with_data(ids::PLANKS, 1);
        assert_ne!(oak, spruce);
        assert_eq!(spruce.id, oak.id);

        let parsed: Block = serde_json::from_str(r#"{ "id": 5, "data": 1 }"#).unwrap();
        assert_eq!(parsed, spruce);
        // Data does not make air solid
        assert!(Block::with_data(ids::AIR, 3).is_air());
    }
}
