//! Axis-aligned block regions

use std::fmt;

use glam::I64Vec3;

use crate::core::types::{format_pos, BlockPos, IVec3};

/// A selected volume of blocks.
pub trait Region: fmt::Debug + Send {
    /// Minimum corner (inclusive)
    fn min_point(&self) -> BlockPos;

    /// Maximum corner (inclusive)
    fn max_point(&self) -> BlockPos;

    /// Number of blocks inside the region, saturating at `u64::MAX`
    fn area(&self) -> u64;

    /// Check if a block position lies inside the region
    fn contains(&self, pos: BlockPos) -> bool;

    /// Extent along X in blocks
    fn width(&self) -> u64 {
        extent(self.min_point().x, self.max_point().x)
    }

    /// Extent along Y in blocks
    fn height(&self) -> u64 {
        extent(self.min_point().y, self.max_point().y)
    }

    /// Extent along Z in blocks
    fn length(&self) -> u64 {
        extent(self.min_point().z, self.max_point().z)
    }

    /// Smallest cuboid enclosing the region
    fn bounding_cuboid(&self) -> Cuboid {
        Cuboid::new(self.min_point(), self.max_point())
    }

    /// Plain-box view of this region, if it is one
    fn as_cuboid(&self) -> Option<&Cuboid> {
        None
    }

    /// Mutable plain-box view of this region, if it is one
    fn as_cuboid_mut(&mut self) -> Option<&mut Cuboid> {
        None
    }
}

/// Inclusive block count between two coordinates. A full `i32` span needs 33 bits.
fn extent(min: i32, max: i32) -> u64 {
    (i64::from(max) - i64::from(min) + 1) as u64
}

/// Cuboid spanned by two corner blocks, both inclusive.
///
/// The defining corners are kept as given; `min` and `max` are derived from
/// them whenever the corners change, so `min <= max` holds on every axis.
///
/// Equality compares the defining corners, not just the covered volume: two
/// cuboids over the same blocks built from opposite corner pairs differ.
/// Compare `min()`/`max()` for volume equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cuboid {
    pos1: BlockPos,
    pos2: BlockPos,
    min: BlockPos,
    max: BlockPos,
}

impl Cuboid {
    /// Create cuboid from two opposite corners, in any order
    pub fn new(pos1: BlockPos, pos2: BlockPos) -> Self {
        Self {
            pos1,
            pos2,
            min: pos1.min(pos2),
            max: pos1.max(pos2),
        }
    }

    /// Create a one-block cuboid
    pub fn single(pos: BlockPos) -> Self {
        Self::new(pos, pos)
    }

    /// Create cuboid of all blocks within `radius` of `center` on every axis
    pub fn around(center: BlockPos, radius: i32) -> Self {
        let half = IVec3::splat(radius.abs());
        Self::new(center - half, center + half)
    }

    /// First defining corner
    pub fn pos1(&self) -> BlockPos {
        self.pos1
    }

    /// Second defining corner
    pub fn pos2(&self) -> BlockPos {
        self.pos2
    }

    /// Minimum corner
    pub fn min(&self) -> BlockPos {
        self.min
    }

    /// Maximum corner
    pub fn max(&self) -> BlockPos {
        self.max
    }

    /// Extent in blocks on each axis
    pub fn size(&self) -> I64Vec3 {
        self.max.as_i64vec3() - self.min.as_i64vec3() + I64Vec3::ONE
    }

    /// Check if `other` lies entirely inside this cuboid
    pub fn contains_cuboid(&self, other: &Cuboid) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    /// Move the corner that faces each axis direction of `delta` outward.
    ///
    /// Positive components grow the cuboid towards +axis, negative towards -axis.
    pub fn expand(&mut self, delta: IVec3) {
        for axis in 0..3 {
            let change = delta[axis];
            if change == 0 {
                continue;
            }
            let pos1_leads = if change > 0 {
                self.pos1[axis] >= self.pos2[axis]
            } else {
                self.pos1[axis] <= self.pos2[axis]
            };
            if pos1_leads {
                self.pos1[axis] += change;
            } else {
                self.pos2[axis] += change;
            }
        }
        self.recalculate();
    }

    /// Move the corner that faces away from each axis direction of `delta` inward.
    ///
    /// Positive components pull the -axis face in, negative pull the +axis face in.
    pub fn contract(&mut self, delta: IVec3) {
        for axis in 0..3 {
            let change = delta[axis];
            if change == 0 {
                continue;
            }
            let pos1_trails = if change > 0 {
                self.pos1[axis] <= self.pos2[axis]
            } else {
                self.pos1[axis] >= self.pos2[axis]
            };
            if pos1_trails {
                self.pos1[axis] += change;
            } else {
                self.pos2[axis] += change;
            }
        }
        self.recalculate();
    }

    /// Translate the whole cuboid
    pub fn shift(&mut self, delta: IVec3) {
        self.pos1 += delta;
        self.pos2 += delta;
        self.recalculate();
    }

    /// Iterate every block position inside, X outermost, Z innermost
    pub fn iter(&self) -> impl Iterator<Item = BlockPos> + use<> {
        let (min, max) = (self.min, self.max);
        (min.x..=max.x).flat_map(move |x| {
            (min.y..=max.y).flat_map(move |y| {
                (min.z..=max.z).map(move |z| IVec3::new(x, y, z))
            })
        })
    }

    fn recalculate(&mut self) {
        self.min = self.pos1.min(self.pos2);
        self.max = self.pos1.max(self.pos2);
    }
}

impl Region for Cuboid {
    fn min_point(&self) -> BlockPos {
        self.min
    }

    fn max_point(&self) -> BlockPos {
        self.max
    }

    fn area(&self) -> u64 {
        self.width()
            .saturating_mul(self.height())
            .saturating_mul(self.length())
    }

    fn contains(&self, pos: BlockPos) -> bool {
        self.min.cmple(pos).all() && self.max.cmpge(pos).all()
    }

    fn as_cuboid(&self) -> Option<&Cuboid> {
        Some(self)
    }

    fn as_cuboid_mut(&mut self) -> Option<&mut Cuboid> {
        Some(self)
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_pos(self.min), format_pos(self.max))
    }
}
