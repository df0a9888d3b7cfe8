//! Session replay binary - drives an editing session from a JSON script.
//!
//! Usage: cargo run --bin session_replay -- --script <PATH> [OPTIONS]
//!   e.g. --script demos/replay.json
//!
//! Options:
//!   --script <PATH>   Script to replay (required)
//!   --config <PATH>   Session config JSON (default: built-in defaults)
//!   --user <NAME>     Session owner (default: "replay")
//!
//! Script format:
//!   {
//!     "position": [0, 64, 0],
//!     "inventory": [{ "block": { "id": 1 }, "count": 64 }],
//!     "steps": [
//!       { "op": "primary", "at": [0, 64, 0] },
//!       { "op": "secondary", "at": [3, 66, 3] },
//!       { "op": "set", "block": { "id": 1 } },
//!       { "op": "undo" }
//!     ]
//!   }

use std::path::{Path, PathBuf};
use std::time::Instant;

use glam::IVec3;
use serde::Deserialize;

use voxel_session::core::{logging, BlockPos, Error, Feedback, Result, SessionConfig};
use voxel_session::math::Region;
use voxel_session::selection::{CuboidSelector, ExtendingCuboidSelector, RegionSelector};
use voxel_session::session::{lock_session, Actor, CompassMode, LocalSession, SessionRegistry};
use voxel_session::tool::{pickaxe, BrushShape};
use voxel_session::voxel::edit::{reborrow_supply, BlockSupply, Clipboard, InventorySupply};
use voxel_session::voxel::world::{read_world, BlockWorld, WorldHandle};
use voxel_session::voxel::Block;

/// Stack size of the replay actor's inventory
const STACK_LIMIT: u32 = 64 * 36;

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    position: IVec3,
    #[serde(default)]
    inventory: Vec<Stack>,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Stack {
    block: Block,
    count: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SelectorMode {
    Cuboid,
    Extending,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Step {
    Pos1 { at: IVec3 },
    Pos2 { at: IVec3 },
    Primary { at: IVec3 },
    Secondary { at: IVec3 },
    Selector { mode: SelectorMode },
    Info,
    MoveTo { at: IVec3 },
    Set { block: Block },
    Undo,
    Redo,
    Copy,
    Paste {
        #[serde(default)]
        skip_air: bool,
    },
    Brush {
        item: u16,
        shape: BrushShape,
        block: Block,
        #[serde(default)]
        mask: Option<Block>,
    },
    Use { item: u16, at: IVec3 },
    Pickaxe {
        mode: String,
        #[serde(default)]
        range: i32,
    },
    Limit { limit: Option<usize> },
    Inventory { enabled: bool },
    Placement,
    Compass { mode: CompassMode },
}

/// Actor standing in the replayed world, printing feedback to stdout.
struct ReplayActor {
    position: BlockPos,
    inventory: InventorySupply,
}

impl Feedback for ReplayActor {
    fn print(&mut self, message: &str) {
        println!("  {}", message);
    }

    fn print_raw(&mut self, message: &str) {
        println!("{}", message);
    }
}

impl Actor for ReplayActor {
    fn block_in(&self) -> BlockPos {
        self.position
    }

    fn inventory(&mut self) -> &mut dyn BlockSupply {
        &mut self.inventory
    }
}

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(script_path) = parse_path_arg(&args, "--script") else {
        eprintln!("Usage: session_replay --script <PATH> [--config <PATH>] [--user <NAME>]");
        std::process::exit(2);
    };
    let config_path = parse_path_arg(&args, "--config");
    let user = parse_str_arg(&args, "--user").unwrap_or_else(|| "replay".to_string());

    if let Err(e) = run(&script_path, config_path, &user) {
        log::error!("Replay failed: {}", e);
        std::process::exit(1);
    }
}

fn run(script_path: &Path, config_path: Option<PathBuf>, user: &str) -> Result<()> {
    let config = match config_path {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    config.validate()?;

    let script: Script = serde_json::from_str(&std::fs::read_to_string(script_path)?)?;
    log::info!("Replaying {} steps from {}", script.steps.len(), script_path.display());

    let mut inventory = InventorySupply::new(STACK_LIMIT);
    for stack in &script.inventory {
        inventory = inventory.with_blocks(stack.block, stack.count);
    }
    let mut actor = ReplayActor { position: script.position, inventory };

    let registry: SessionRegistry = SessionRegistry::new(config);
    let shared = registry.session(user);
    let mut session = lock_session(&shared);
    let world = BlockWorld::new(user).into_handle();

    let start = Instant::now();
    session.tell_version(&mut actor);
    for (index, step) in script.steps.iter().enumerate() {
        println!("[{}] {:?}", index, step);
        // Step failures are reported to the user and do not stop the replay
        if let Err(e) = apply_step(&mut session, &world, &mut actor, step) {
            actor.print(&e.to_string());
        }
    }

    println!();
    println!("=== Replay Complete ===");
    println!("Steps:   {}", script.steps.len());
    println!("Blocks:  {}", read_world(&world).block_count());
    println!("History: {} ({} undoable)", session.history().len(), session.history().undo_count());
    println!("Time:    {:.2?}", start.elapsed());
    Ok(())
}

fn apply_step(
    session: &mut LocalSession,
    world: &WorldHandle,
    actor: &mut ReplayActor,
    step: &Step,
) -> Result<()> {
    match step {
        Step::Pos1 { at } => {
            session.set_pos1(*at);
            actor.print(&format!("First position set to {:?}.", at.to_array()));
        }
        Step::Pos2 { at } => {
            session.set_pos2(*at);
            actor.print(&format!("Second position set to {:?}.", at.to_array()));
        }
        Step::Primary { at } => {
            session.select_primary(*at, actor);
        }
        Step::Secondary { at } => {
            session.select_secondary(*at, actor);
        }
        Step::Selector { mode } => {
            let selector: Box<dyn RegionSelector> = match mode {
                SelectorMode::Cuboid => Box::new(CuboidSelector::from_selector(session.selector())),
                SelectorMode::Extending => {
                    Box::new(ExtendingCuboidSelector::from_selector(session.selector()))
                }
            };
            session.set_selector(selector);
            actor.print(&format!("Selection mode: {}", session.selector().type_name()));
        }
        Step::Info => {
            for line in session.selector().information_lines() {
                actor.print(&line);
            }
        }
        Step::MoveTo { at } => {
            actor.position = *at;
        }
        Step::Set { block } => {
            let region = session.region()?;
            let bounds = region.bounding_cuboid();
            let mut edit = session.new_change_set(world);
            let mut supply = session.block_supply(actor);
            let mut changed = 0;
            let mut outcome = Ok(());
            for pos in bounds.iter().filter(|pos| region.contains(*pos)) {
                match edit.set_block(pos, *block, reborrow_supply(&mut supply)) {
                    Ok(true) => changed += 1,
                    Ok(false) => {}
                    Err(e) => {
                        outcome = Err(e);
                        break;
                    }
                }
            }
            // Partial edits stay undoable
            session.remember(edit);
            actor.print(&format!("{} block(s) have been changed.", changed));
            outcome?;
        }
        Step::Undo => {
            let supply = session.block_supply(actor);
            match session.undo(supply).map(|replayed| replayed.applied.missing_blocks()) {
                Some(missing) => {
                    actor.print("Undo successful.");
                    report_missing(actor, missing);
                }
                None => actor.print("Nothing left to undo."),
            }
        }
        Step::Redo => {
            let supply = session.block_supply(actor);
            match session.redo(supply).map(|replayed| replayed.applied.missing_blocks()) {
                Some(missing) => {
                    actor.print("Redo successful.");
                    report_missing(actor, missing);
                }
                None => actor.print("Nothing left to redo."),
            }
        }
        Step::Copy => {
            let bounds = session.region()?.bounding_cuboid();
            let origin = session.placement_position(actor)?;
            let clipboard = Clipboard::copy(&read_world(world), &bounds, origin);
            actor.print(&format!("{} block(s) copied.", bounds.area()));
            session.set_clipboard(clipboard);
        }
        Step::Paste { skip_air } => {
            let at = session.placement_position(actor)?;
            let clipboard = session.clipboard()?;
            let mut edit = session.new_change_set(world);
            let supply = session.block_supply(actor);
            let result = clipboard.paste(&mut edit, at, *skip_air, supply);
            session.remember(edit);
            let changed = result?;
            actor.print(&format!("The clipboard has been pasted at {:?} ({}).", at.to_array(), changed));
        }
        Step::Brush { item, shape, block, mask } => {
            let brush = session.brush_tool(*item)?;
            brush.shape = *shape;
            brush.fill = *block;
            brush.mask = *mask;
            actor.print(&format!("Brush bound to item {}.", item));
        }
        Step::Use { item, at } => {
            let Some(brush) = session.tool(*item).and_then(|tool| tool.as_brush()).cloned() else {
                actor.print(&format!("No brush bound to item {}.", item));
                return Ok(());
            };
            let mut edit = session.new_change_set(world);
            let supply = session.block_supply(actor);
            let result = brush.apply(&mut edit, *at, supply);
            session.remember(edit);
            let changed = result?;
            actor.print(&format!("Brushed {} block(s).", changed));
        }
        Step::Pickaxe { mode, range } => {
            let tool = pickaxe::from_name(mode, *range)
                .ok_or_else(|| Error::Config(format!("unknown pickaxe mode {}", mode)))?;
            session.set_super_pickaxe(tool);
            session.enable_super_pickaxe();
            actor.print(&format!("Super pickaxe mode: {}", session.super_pickaxe().name()));
        }
        Step::Limit { limit } => {
            let effective = session.set_block_change_limit(*limit);
            match effective {
                Some(limit) => actor.print(&format!("Block change limit set to {}.", limit)),
                None => actor.print("Block change limit removed."),
            }
        }
        Step::Inventory { enabled } => {
            session.set_use_inventory(*enabled);
        }
        Step::Placement => {
            if session.toggle_placement_position() {
                actor.print("Now placing at pos #1.");
            } else {
                actor.print("Now placing at the block you stand in.");
            }
        }
        Step::Compass { mode } => {
            session.set_compass_mode(*mode);
        }
    }
    Ok(())
}

fn report_missing(actor: &mut ReplayActor, missing: usize) {
    if missing > 0 {
        actor.print(&format!("{} block(s) could not be placed: out of blocks.", missing));
    }
}

fn parse_path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    parse_str_arg(args, flag).map(PathBuf::from)
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
