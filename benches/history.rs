use criterion::{criterion_group, criterion_main, Criterion, black_box};

use glam::IVec3;

use voxel_session::math::Region;
use voxel_session::selection::{ExtendingCuboidSelector, RegionSelector};
use voxel_session::voxel::block::{ids, Block};
use voxel_session::voxel::edit::{ChangeSet, EditHistory};
use voxel_session::voxel::world::BlockWorld;

fn bench_history_remember(c: &mut Criterion) {
    let world = BlockWorld::new("bench").into_handle();
    let palette = [Block::new(ids::STONE), Block::new(ids::DIRT)];

    // Shared across criterion's repeated calls so the block pattern never restarts
    let mut history: EditHistory<ChangeSet> = EditHistory::new(15);
    let mut i = 0i32;

    c.bench_function("history_remember_evicting", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            // Alternate blocks so every edit changes something
            let block = palette[((i / 64) & 1) as usize];
            let mut edit = ChangeSet::new(world.clone(), None);
            let changed = edit
                .set_block(IVec3::new(i % 64, 0, 0), block, None)
                .expect("unlimited edit without a supply");
            assert!(changed, "alternating blocks always change the world");
            history.remember(black_box(edit));
        });
    });
}

fn bench_history_undo_redo(c: &mut Criterion) {
    let world = BlockWorld::new("bench").into_handle();
    let mut history: EditHistory<ChangeSet> = EditHistory::new(15);
    for i in 0..15 {
        let mut edit = ChangeSet::new(world.clone(), None);
        for x in 0..16 {
            edit.set_block(IVec3::new(x, i, 0), Block::new(ids::DIRT), None)
                .expect("unlimited edit without a supply");
        }
        history.remember(edit);
    }

    c.bench_function("history_undo_redo_16_blocks", |b| {
        b.iter(|| {
            let undone = history.undo(None).map(|r| r.applied.changes().len());
            let redone = history.redo(None).map(|r| r.applied.changes().len());
            black_box((undone, redone))
        });
    });
}

fn bench_extending_growth(c: &mut Criterion) {
    c.bench_function("extending_selector_growth", |b| {
        b.iter(|| {
            let mut selector = ExtendingCuboidSelector::new();
            selector.select_primary(IVec3::ZERO);
            for i in 1..64 {
                let pos = IVec3::new(i * ((i % 2) * 2 - 1), i % 7, -i);
                selector.select_secondary(black_box(pos));
            }
            black_box(selector.region().map(|r| r.area()).unwrap_or(0))
        });
    });
}

criterion_group!(
    benches,
    bench_history_remember,
    bench_history_undo_redo,
    bench_extending_growth,
);
criterion_main!(benches);
