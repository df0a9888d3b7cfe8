//! Super pickaxe modes

use crate::core::types::BlockPos;
use crate::math::Cuboid;
use super::{BlockTool, Tool};

/// Breaks only the clicked block.
#[derive(Clone, Copy, Debug, Default)]
pub struct SinglePickaxe;

impl Tool for SinglePickaxe {
    fn name(&self) -> &'static str {
        "single"
    }
}

impl BlockTool for SinglePickaxe {
    fn affected(&self, clicked: BlockPos) -> Cuboid {
        Cuboid::single(clicked)
    }
}

/// Breaks every block within `range` of the clicked block.
#[derive(Clone, Copy, Debug)]
pub struct AreaPickaxe {
    pub range: i32,
}

impl Tool for AreaPickaxe {
    fn name(&self) -> &'static str {
        "area"
    }
}

impl BlockTool for AreaPickaxe {
    fn affected(&self, clicked: BlockPos) -> Cuboid {
        Cuboid::around(clicked, self.range)
    }
}

/// Breaks connected blocks of the clicked type, up to `range` away.
#[derive(Clone, Copy, Debug)]
pub struct RecursivePickaxe {
    pub range: i32,
}

impl Tool for RecursivePickaxe {
    fn name(&self) -> &'static str {
        "recursive"
    }
}

impl BlockTool for RecursivePickaxe {
    /// Upper bound of the flood; only connected blocks inside are broken.
    fn affected(&self, clicked: BlockPos) -> Cuboid {
        Cuboid::around(clicked, self.range)
    }
}

/// Build a pickaxe mode by name. `range` is ignored by `single`.
pub fn from_name(name: &str, range: i32) -> Option<Box<dyn BlockTool>> {
    match name {
        "single" => Some(Box::new(SinglePickaxe)),
        "area" => Some(Box::new(AreaPickaxe { range })),
        "recursive" | "recur" => Some(Box::new(RecursivePickaxe { range })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IVec3;
    use crate::math::Region;

    #[test]
    fn test_single_affects_one_block() {
        let area = SinglePickaxe.affected(IVec3::new(3, 4, 5));
        assert_eq!(area.area(), 1);
        assert!(area.contains(IVec3::new(3, 4, 5)));
    }

    #[test]
    fn test_area_range() {
        let area = AreaPickaxe { range: 2 }.affected(IVec3::ZERO);
        assert_eq!(area.size(), glam::I64Vec3::splat(5));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(from_name("single", 9).map(|t| t.name()), Some("single"));
        assert_eq!(from_name("recur", 3).map(|t| t.name()), Some("recursive"));
        let area = from_name("area", 1).unwrap();
        assert_eq!(area.affected(IVec3::ZERO).area(), 27);
        assert!(from_name("laser", 1).is_none());
    }
}
