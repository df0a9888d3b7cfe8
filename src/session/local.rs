//! Per-user editing session.
//!
//! A session ties together the user's selection, undo history, clipboard and
//! settings. Sessions are not bound to a connection and can be handed between
//! owners; persisting them is left to the caller.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::config::SessionConfig;
use crate::core::error::{BindRejection, Error};
use crate::core::feedback::Feedback;
use crate::core::types::{BlockPos, ItemId, Result};
use crate::math::{Cuboid, Region};
use crate::selection::{CuboidSelector, RegionSelector};
use crate::tool::{BlockTool, BrushTool, SinglePickaxe, Tool};
use crate::voxel::edit::{BlockSupply, ChangeSet, Clipboard, EditHistory, EditRecord, Replayed};
use crate::voxel::world::WorldHandle;
use super::actor::Actor;

/// Crate version, shown in the first-use notice
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Item ids below 255 (except 0) are blocks and cannot hold tools
const BLOCK_ITEM_IDS: Range<ItemId> = 1..255;

/// Items that can never hold tools (coal, glowstone dust)
const UNUSABLE_ITEMS: [ItemId; 2] = [263, 348];

/// What the navigation wand does when used
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassMode {
    /// Jump to the targeted block
    #[default]
    JumpTo,
    /// Pass through the wall in front of the user
    Thru,
}

/// Reference to a stored world snapshot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub name: String,
}

/// Editing state of one user.
#[derive(Debug)]
pub struct LocalSession<E = ChangeSet> {
    config: Arc<SessionConfig>,

    // -- Selection ---------------------------------------------------------
    pos1: Option<BlockPos>,
    pos2: Option<BlockPos>,
    region: Option<Box<dyn Region>>,
    selector: Box<dyn RegionSelector>,

    // -- Edits -------------------------------------------------------------
    history: EditHistory<E>,
    clipboard: Option<Clipboard>,
    change_limit: Option<usize>,
    use_inventory: bool,

    // -- Tools -------------------------------------------------------------
    tool_control: bool,
    super_pickaxe: bool,
    pickaxe_mode: Box<dyn BlockTool>,
    tools: HashMap<ItemId, Box<dyn Tool>>,

    // -- Misc --------------------------------------------------------------
    place_at_pos1: bool,
    snapshot: Option<Snapshot>,
    last_script: Option<String>,
    compass_mode: CompassMode,
    told_version: bool,
}

impl<E: EditRecord> LocalSession<E> {
    /// Create a fresh session using the deployment's config
    pub fn new(config: Arc<SessionConfig>) -> Self {
        let history = EditHistory::new(config.history_capacity);
        let change_limit = config.default_change_limit;
        Self {
            config,
            pos1: None,
            pos2: None,
            region: None,
            selector: Box::new(CuboidSelector::new()),
            history,
            clipboard: None,
            change_limit,
            use_inventory: false,
            tool_control: true,
            super_pickaxe: false,
            pickaxe_mode: Box::new(SinglePickaxe),
            tools: HashMap::new(),
            place_at_pos1: false,
            snapshot: None,
            last_script: None,
            compass_mode: CompassMode::default(),
            told_version: false,
        }
    }

    /// Config this session was created with
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // -- History -------------------------------------------------------------

    /// Record an applied edit for undo
    pub fn remember(&mut self, edit: E) {
        self.history.remember(edit);
    }

    /// Undo the latest edit. `None` if there is nothing to undo.
    pub fn undo(&mut self, supply: Option<&mut dyn BlockSupply>) -> Option<Replayed<'_, E>> {
        self.history.undo(supply)
    }

    /// Redo the next undone edit. `None` if there is nothing to redo.
    pub fn redo(&mut self, supply: Option<&mut dyn BlockSupply>) -> Option<Replayed<'_, E>> {
        self.history.redo(supply)
    }

    /// Forget all undo history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Undo history
    pub fn history(&self) -> &EditHistory<E> {
        &self.history
    }
}

impl<E> LocalSession<E> {
    // -- Positions and region ------------------------------------------------

    /// Check if both positions are set
    pub fn is_region_defined(&self) -> bool {
        self.pos1.is_some() && self.pos2.is_some()
    }

    /// First position
    pub fn pos1(&self) -> Result<BlockPos> {
        self.pos1.ok_or(Error::IncompleteRegion)
    }

    /// Second position
    pub fn pos2(&self) -> Result<BlockPos> {
        self.pos2.ok_or(Error::IncompleteRegion)
    }

    /// Set the first position directly
    pub fn set_pos1(&mut self, pos: BlockPos) {
        self.pos1 = Some(pos);
        self.recompute_region();
    }

    /// Set the second position directly
    pub fn set_pos2(&mut self, pos: BlockPos) {
        self.pos2 = Some(pos);
        self.recompute_region();
    }

    /// Selected region.
    ///
    /// If the region is changed through [`LocalSession::region_mut`], call
    /// [`LocalSession::learn_region_changes`] to update the positions.
    pub fn region(&self) -> Result<&dyn Region> {
        self.region.as_deref().ok_or(Error::IncompleteRegion)
    }

    /// Mutable selected region
    pub fn region_mut(&mut self) -> Result<&mut dyn Region> {
        match self.region.as_deref_mut() {
            Some(region) => Ok(region),
            None => Err(Error::IncompleteRegion),
        }
    }

    /// Replace the region without touching the positions
    pub fn set_region(&mut self, region: Box<dyn Region>) {
        self.region = Some(region);
    }

    /// Copy the corners of a cuboid region back into the positions
    pub fn learn_region_changes(&mut self) {
        let Some(cuboid) = self.region.as_deref().and_then(|region| region.as_cuboid()) else {
            return;
        };
        self.pos1 = Some(cuboid.pos1());
        self.pos2 = Some(cuboid.pos2());
    }

    /// Rebuild the region once both positions are set. The only place
    /// positions turn into a region; with a position missing, the current
    /// region (possibly installed by [`LocalSession::set_region`]) is kept.
    fn recompute_region(&mut self) {
        if let (Some(pos1), Some(pos2)) = (self.pos1, self.pos2) {
            self.region = Some(Box::new(Cuboid::new(pos1, pos2)));
        }
    }

    // -- Selector ------------------------------------------------------------

    /// Active region selector
    pub fn selector(&self) -> &dyn RegionSelector {
        self.selector.as_ref()
    }

    /// Switch selection mode, adopting the new selector's anchors
    pub fn set_selector(&mut self, selector: Box<dyn RegionSelector>) {
        log::debug!(
            "Selection mode {} -> {}",
            self.selector.type_name(),
            selector.type_name()
        );
        self.selector = selector;
        self.adopt_selection();
    }

    /// Primary pick through the active selector. Returns true if the selection changed.
    pub fn select_primary(&mut self, pos: BlockPos, out: &mut dyn Feedback) -> bool {
        if !self.selector.select_primary(pos) {
            return false;
        }
        self.adopt_selection();
        self.selector.explain_primary_selection(out, pos);
        true
    }

    /// Secondary pick through the active selector. Returns true if the selection changed.
    pub fn select_secondary(&mut self, pos: BlockPos, out: &mut dyn Feedback) -> bool {
        if !self.selector.select_secondary(pos) {
            return false;
        }
        self.adopt_selection();
        self.selector.explain_secondary_selection(out, pos);
        true
    }

    /// Take the selector's anchors. The selector owns the selection, so an
    /// incomplete selector leaves no region.
    fn adopt_selection(&mut self) {
        let (pos1, pos2) = self.selector.anchors();
        self.pos1 = pos1;
        self.pos2 = pos2;
        if pos1.is_none() || pos2.is_none() {
            self.region = None;
        }
        self.recompute_region();
    }

    // -- Clipboard -----------------------------------------------------------

    /// Clipboard contents
    pub fn clipboard(&self) -> Result<&Clipboard> {
        self.clipboard.as_ref().ok_or(Error::EmptyClipboard)
    }

    /// Replace the clipboard contents
    pub fn set_clipboard(&mut self, clipboard: Clipboard) {
        self.clipboard = Some(clipboard);
    }

    // -- Tools ---------------------------------------------------------------

    /// Check if tools respond to use
    pub fn is_tool_control_enabled(&self) -> bool {
        self.tool_control
    }

    /// Enable or disable tool use
    pub fn set_tool_control(&mut self, enabled: bool) {
        self.tool_control = enabled;
    }

    /// Tool bound to an item
    pub fn tool(&self, item: ItemId) -> Option<&dyn Tool> {
        self.tools.get(&item).map(|tool| tool.as_ref())
    }

    /// Mutable tool bound to an item
    pub fn tool_mut(&mut self, item: ItemId) -> Option<&mut dyn Tool> {
        match self.tools.get_mut(&item) {
            Some(tool) => Some(tool.as_mut()),
            None => None,
        }
    }

    /// Bind a tool to an item, replacing any previous binding.
    ///
    /// Block ids, unusable items and the configured wands are rejected.
    pub fn set_tool(&mut self, item: ItemId, tool: Box<dyn Tool>) -> Result<()> {
        self.check_binding(item)?;
        log::debug!("Bound {} tool to item {}", tool.name(), item);
        self.tools.insert(item, tool);
        Ok(())
    }

    /// Remove the tool bound to an item
    pub fn unbind_tool(&mut self, item: ItemId) -> Option<Box<dyn Tool>> {
        self.tools.remove(&item)
    }

    /// Brush bound to an item. Any other tool in the slot is replaced by a
    /// fresh brush.
    pub fn brush_tool(&mut self, item: ItemId) -> Result<&mut BrushTool> {
        self.check_binding(item)?;
        let slot = self
            .tools
            .entry(item)
            .or_insert_with(|| Box::new(BrushTool::default()) as Box<dyn Tool>);
        if slot.as_brush_mut().is_none() {
            log::debug!("Replaced {} tool on item {} with a brush", slot.name(), item);
            *slot = Box::new(BrushTool::default());
        }
        slot.as_brush_mut().ok_or(Error::NotABrush { item })
    }

    fn check_binding(&self, item: ItemId) -> Result<()> {
        let reason = if BLOCK_ITEM_IDS.contains(&item) {
            BindRejection::BlockId
        } else if UNUSABLE_ITEMS.contains(&item) {
            BindRejection::UnusableItem
        } else if item == self.config.wand_item {
            BindRejection::Wand
        } else if item == self.config.navigation_wand {
            BindRejection::NavigationWand
        } else {
            return Ok(());
        };
        Err(Error::InvalidToolBinding { item, reason })
    }

    // -- Super pickaxe -------------------------------------------------------

    /// Check if the super pickaxe is enabled
    pub fn has_super_pickaxe(&self) -> bool {
        self.super_pickaxe
    }

    /// Enable the super pickaxe
    pub fn enable_super_pickaxe(&mut self) {
        self.super_pickaxe = true;
    }

    /// Disable the super pickaxe
    pub fn disable_super_pickaxe(&mut self) {
        self.super_pickaxe = false;
    }

    /// Toggle the super pickaxe, returning the new state
    pub fn toggle_super_pickaxe(&mut self) -> bool {
        self.super_pickaxe = !self.super_pickaxe;
        self.super_pickaxe
    }

    /// Current super pickaxe mode
    pub fn super_pickaxe(&self) -> &dyn BlockTool {
        self.pickaxe_mode.as_ref()
    }

    /// Change the super pickaxe mode
    pub fn set_super_pickaxe(&mut self, mode: Box<dyn BlockTool>) {
        self.pickaxe_mode = mode;
    }

    // -- Placement -----------------------------------------------------------

    /// Where placement commands put things: the actor's position, or the
    /// first position when placement at pos1 is on.
    pub fn placement_position(&self, actor: &dyn Actor) -> Result<BlockPos> {
        if !self.place_at_pos1 {
            return Ok(actor.block_in());
        }
        self.pos1()
    }

    /// Toggle placement at pos1, returning the new state
    pub fn toggle_placement_position(&mut self) -> bool {
        self.place_at_pos1 = !self.place_at_pos1;
        self.place_at_pos1
    }

    // -- Limits and inventory ------------------------------------------------

    /// Maximum blocks one edit may change. `None` = unlimited.
    pub fn block_change_limit(&self) -> Option<usize> {
        self.change_limit
    }

    /// Set the change limit, clamped to the configured maximum. Returns the
    /// limit in effect.
    pub fn set_block_change_limit(&mut self, limit: Option<usize>) -> Option<usize> {
        let effective = match (limit, self.config.max_change_limit) {
            (None, max) => max,
            (Some(limit), Some(max)) => Some(limit.min(max)),
            (Some(limit), None) => Some(limit),
        };
        if effective != limit {
            log::debug!("Change limit {:?} clamped to {:?}", limit, effective);
        }
        self.change_limit = effective;
        effective
    }

    /// Check if edits draw blocks from the actor's inventory
    pub fn is_using_inventory(&self) -> bool {
        self.use_inventory
    }

    /// Turn inventory use on or off
    pub fn set_use_inventory(&mut self, use_inventory: bool) {
        self.use_inventory = use_inventory;
    }

    /// Block supply for edits: the actor's inventory when inventory use is on,
    /// otherwise `None` (unconstrained).
    pub fn block_supply<'a>(&self, actor: &'a mut dyn Actor) -> Option<&'a mut dyn BlockSupply> {
        if !self.use_inventory {
            return None;
        }
        Some(actor.inventory())
    }

    // -- Misc settings -------------------------------------------------------

    /// Selected snapshot
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Select a snapshot
    pub fn set_snapshot(&mut self, snapshot: Option<Snapshot>) {
        self.snapshot = snapshot;
    }

    /// Last script run
    pub fn last_script(&self) -> Option<&str> {
        self.last_script.as_deref()
    }

    /// Remember the last script run
    pub fn set_last_script(&mut self, script: impl Into<String>) {
        self.last_script = Some(script.into());
    }

    /// Navigation wand mode
    pub fn compass_mode(&self) -> CompassMode {
        self.compass_mode
    }

    /// Change the navigation wand mode
    pub fn set_compass_mode(&mut self, mode: CompassMode) {
        self.compass_mode = mode;
    }

    /// Show the version notice, once per session, if the config asks for it
    pub fn tell_version(&mut self, out: &mut dyn Feedback) {
        if !self.config.show_first_use_version || self.told_version {
            return;
        }
        out.print_raw(&format!("voxel-session ver. {}", VERSION));
        log::debug!("Told version {}", VERSION);
        self.told_version = true;
    }
}

impl LocalSession<ChangeSet> {
    /// Start an edit on `world` limited by this session's change limit
    pub fn new_change_set(&self, world: &WorldHandle) -> ChangeSet {
        ChangeSet::new(world.clone(), self.change_limit)
    }
}
