//! Tools bound to items, and the super pickaxe modes.
//!
//! Sessions only create, bind and look up tools. Capabilities are exposed
//! through trait methods (`as_brush`) rather than downcasting.

pub mod brush;
pub mod pickaxe;

pub use brush::{BrushShape, BrushTool};
pub use pickaxe::{AreaPickaxe, RecursivePickaxe, SinglePickaxe};

use std::fmt::Debug;

use crate::core::types::BlockPos;
use crate::math::Cuboid;
use crate::voxel::block::Block;

/// Something an item does when used.
pub trait Tool: Debug + Send {
    /// Short display name
    fn name(&self) -> &'static str;

    /// Brush view of this tool, if it is one
    fn as_brush(&self) -> Option<&BrushTool> {
        None
    }

    /// Mutable brush view of this tool, if it is one
    fn as_brush_mut(&mut self) -> Option<&mut BrushTool> {
        None
    }
}

/// Tool that acts on the block it is used on, such as a super pickaxe mode.
pub trait BlockTool: Tool {
    /// Blocks affected when used on `clicked`
    fn affected(&self, clicked: BlockPos) -> Cuboid;
}

/// Reports information about the clicked block.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryTool;

impl Tool for QueryTool {
    fn name(&self) -> &'static str {
        "info"
    }
}

/// Replaces the clicked block with a fixed block.
#[derive(Clone, Copy, Debug)]
pub struct BlockReplacer {
    pub block: Block,
}

impl Tool for BlockReplacer {
    fn name(&self) -> &'static str {
        "replacer"
    }
}
