mod common;

use common::{grid, populate, positions, Recorder, CONTAINER_WIDTH};
use supergrid_layout::{
    records_from_json, BlockDescriptor, FixedMeasure, GridOptions, LayoutPolicy, OpenSpace,
    PixelPoint, PixelRect, SuperGrid,
};

#[test]
fn full_width_blocks_stack_in_insertion_order() {
    let mut g = grid(GridOptions::default());
    let ids = populate(&mut g, &[(0, 6, 0.0, 100.0), (0, 6, 0.0, 50.0), (0, 6, 0.0, 70.0)]);

    let tops: Vec<f64> = ids.iter().map(|id| g.block(*id).unwrap().pixel_y).collect();
    assert_eq!(tops, vec![0.0, 100.0, 150.0]);
    assert!((g.container_height() - 220.0).abs() < 0.001);
}

#[test]
fn packed_rows_wrap_seventh_block() {
    let mut g = grid(GridOptions::default().with_policy(LayoutPolicy::PackedRows));
    let ids = populate(&mut g, &[(0, 1, 0.0, 40.0); 7]);

    for (column, id) in ids.iter().take(6).enumerate() {
        let block = g.block(*id).unwrap();
        assert_eq!(block.x, column);
        assert_eq!(block.pixel_y, 0.0);
    }
    let last = g.block(ids[6]).unwrap();
    assert_eq!(last.x, 0);
    assert!((last.pixel_y - 40.0).abs() < 0.001);
    assert!((g.container_height() - 80.0).abs() < 0.001);
}

#[test]
fn open_spaces_on_empty_grid() {
    let mut g = grid(GridOptions::default());
    let spaces = g.open_spaces(Some(50.0), Some(200.0));
    assert_eq!(
        spaces,
        vec![OpenSpace {
            x: 0,
            y: 0.0,
            width: 6,
            height: 200.0
        }]
    );
    assert!(g.open_spaces(None, None).is_empty());
}

#[test]
fn open_spaces_default_threshold_is_min_block_height() {
    let mut g = grid(GridOptions::default());
    populate(
        &mut g,
        &[(0, 3, 0.0, 100.0), (3, 3, 0.0, 60.0), (0, 6, 1.0, 20.0)],
    );

    // The 40px gap under the right block is below the 50px default.
    assert!(g.open_spaces(None, None).is_empty());
    assert_eq!(
        g.open_spaces(Some(10.0), None),
        vec![OpenSpace {
            x: 3,
            y: 60.0,
            width: 3,
            height: 40.0
        }]
    );
}

#[test]
fn narrow_resize_keeps_columns() {
    let options = GridOptions::interactive()
        .with_resizable(true, false)
        .with_min_block_size(2, 50.0);
    let mut g = grid(options);
    let ids = populate(&mut g, &[(1, 3, 0.0, 100.0)]);
    let id = ids[0];

    // 1200px container: 200px per column. This box covers a single column.
    let rect = PixelRect::new(200.0, 0.0, 150.0, 100.0);
    g.resize_start(id);
    g.resize(id, rect);
    g.resize_stop(id, rect);

    let block = g.block(id).unwrap();
    assert_eq!((block.x, block.width), (1, 3));
    assert_eq!(g.events().changes, 1);
}

#[test]
fn resize_snaps_height() {
    let options = GridOptions::interactive()
        .with_resizable(true, true)
        .with_height_snap(25.0);
    let mut g = grid(options);
    let ids = populate(&mut g, &[(0, 2, 0.0, 100.0), (0, 2, 1.0, 100.0)]);

    let rect = PixelRect::new(0.0, 0.0, 600.0, 61.0);
    g.resize_start(ids[0]);
    g.resize(ids[0], rect);
    g.resize_stop(ids[0], rect);

    let resized = g.block(ids[0]).unwrap();
    assert_eq!(resized.width, 3);
    assert!((resized.pixel_height - 75.0).abs() < 0.001);
    assert!((g.block(ids[1]).unwrap().pixel_y - 75.0).abs() < 0.001);
}

#[test]
fn pack_lowers_container_height() {
    let mut g = grid(GridOptions::default());
    let ids = populate(&mut g, &[(0, 3, 0.0, 100.0), (0, 3, 1.0, 30.0), (0, 6, 2.0, 10.0)]);
    let before = g.container_height();
    assert!((before - 140.0).abs() < 0.001);

    g.pack();

    assert!(g.container_height() <= before);
    assert!((g.container_height() - 110.0).abs() < 0.001);
    assert_eq!(g.block(ids[1]).unwrap().x, 3);
    assert_eq!(g.block(ids[1]).unwrap().pixel_y, 0.0);
    assert!((g.block(ids[2]).unwrap().pixel_y - 100.0).abs() < 0.001);
    assert_eq!(g.events().changes, 1);
}

#[test]
fn drag_moves_block_under_its_neighbour() {
    let mut g = grid(GridOptions::interactive());
    let ids = populate(&mut g, &[(0, 3, 0.0, 100.0), (3, 3, 0.0, 100.0)]);
    let (a, b) = (ids[0], ids[1]);

    g.drag_start(a);
    g.drag(a, PixelPoint::new(590.0, 150.0));
    let block = g.block(a).unwrap();
    assert_eq!(block.x, 3);
    assert_eq!(block.y, 1.0);
    assert!((block.pixel_y - 100.0).abs() < 0.001);
    assert_eq!(g.events().changes, 0);

    g.drag_stop(a, PixelPoint::new(590.0, 150.0));
    assert_eq!(g.events().changes, 1);
    assert_eq!(g.active_block(), None);
    assert_eq!(g.block(b).unwrap().pixel_y, 0.0);

    let records = g.to_json();
    assert_eq!((records[0].x_pos, records[0].y_pos), (3, 1.0));
}

#[test]
fn packed_rows_drag_into_second_row() {
    let mut g = grid(GridOptions::interactive().with_policy(LayoutPolicy::PackedRows));
    let ids = populate(&mut g, &[(0, 3, 0.0, 100.0); 4]);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    let slot = |g: &common::TestGrid, id| {
        let block = g.block(id).unwrap();
        (block.x, block.pixel_y)
    };
    assert_eq!(slot(&g, c), (0, 100.0));

    g.drag_start(a);
    g.drag(a, PixelPoint::new(0.0, 120.0));
    assert_eq!(slot(&g, a), (0, 100.0));
    assert_eq!(slot(&g, b), (0, 0.0));
    assert_eq!(slot(&g, c), (3, 0.0));
    assert_eq!(slot(&g, d), (3, 100.0));

    g.drag_stop(a, PixelPoint::new(0.0, 120.0));
    assert_eq!(g.active_block(), None);
    assert_eq!(g.events().changes, 1);
    assert_eq!(slot(&g, a), (0, 100.0));
    assert_eq!(slot(&g, c), (3, 0.0));

    // The committed order survives a plain relayout.
    g.relayout();
    assert_eq!(slot(&g, a), (0, 100.0));
    assert_eq!(slot(&g, b), (0, 0.0));
    assert_eq!(slot(&g, d), (3, 100.0));
    assert!((g.container_height() - 200.0).abs() < 0.001);
}

#[test]
fn records_with_out_of_range_columns_are_clamped() {
    common::init_logging();
    let records = records_from_json(
        r#"[{"id":1,"x_pos":-1,"y_pos":0,"width":2},{"id":2,"x_pos":5,"y_pos":1,"width":9,"height":40}]"#,
    )
    .unwrap();
    let measure = FixedMeasure::new(CONTAINER_WIDTH).with_default_height(100.0);
    let g = SuperGrid::from_records(GridOptions::default(), measure, Recorder::default(), &records);

    let placed: Vec<_> = g.blocks().iter().map(|b| (b.x, b.width, b.pixel_y)).collect();
    assert_eq!(placed, vec![(0, 2, 0.0), (0, 6, 100.0)]);
}

#[test]
fn static_grid_ignores_gestures() {
    let mut g = grid(GridOptions::default());
    let ids = populate(&mut g, &[(0, 3, 0.0, 100.0), (3, 3, 0.0, 100.0)]);
    let before = positions(&g);

    g.drag_start(ids[0]);
    g.drag(ids[0], PixelPoint::new(600.0, 300.0));
    g.drag_stop(ids[0], PixelPoint::new(600.0, 300.0));

    assert_eq!(positions(&g), before);
    assert_eq!(g.events().changes, 0);
    assert!(g.events().placeholders.is_empty());
}

#[test]
fn stale_stop_after_removal_is_ignored() {
    let mut g = grid(GridOptions::interactive());
    let ids = populate(&mut g, &[(0, 6, 0.0, 100.0), (0, 6, 1.0, 100.0)]);

    g.drag_start(ids[0]);
    assert!(g.remove_block(ids[0]).is_some());
    g.drag_stop(ids[0], PixelPoint::new(0.0, 0.0));

    assert_eq!(g.events().changes, 0);
    assert_eq!(g.events().placeholders.last(), Some(&None));

    g.relayout();
    assert_eq!(g.block(ids[1]).unwrap().pixel_y, 0.0);
    assert_eq!(g.to_json().len(), 1);
}

#[test]
fn removed_ids_are_not_reused() {
    let mut g = grid(GridOptions::default());
    let first = g.add_block(BlockDescriptor::new(0, 1));
    g.remove_block(first);
    let second = g.add_block(BlockDescriptor::new(0, 1));
    assert_ne!(first, second);
    assert!(g.block(first).is_none());
}

#[test]
fn narrow_container_collapses() {
    common::init_logging();
    let measure = FixedMeasure::new(750.0).with_default_height(100.0);
    let mut g = SuperGrid::with_blocks(
        GridOptions::default().with_collapse_width(800.0),
        measure,
        Recorder::default(),
        vec![BlockDescriptor::new(0, 6)],
    );
    assert!(g.is_collapsed());
    assert_eq!(g.events().collapses, vec![true]);
    assert!(g.events().frames.is_empty());

    g.measure_mut().container_width = CONTAINER_WIDTH;
    g.container_resized();
    assert!(!g.is_collapsed());
    assert_eq!(g.events().collapses, vec![true, false]);
    assert_eq!(g.events().frames.len(), 1);
    assert!((g.container_height() - 100.0).abs() < 0.001);
}

#[test]
fn deferred_layout_runs_once() {
    let mut g = grid(GridOptions::default());
    assert!(g.run_deferred());
    assert!(!g.run_deferred());
    assert_eq!(g.events().loaded, 1);
}

#[test]
fn unknown_policy_in_options_falls_back() {
    let options: GridOptions =
        serde_json::from_str(r#"{"staticGrid": false, "layout": "spiral"}"#).unwrap();
    assert_eq!(options.layout_policy, LayoutPolicy::Classic);

    let mut g = grid(options);
    let ids = populate(&mut g, &[(0, 6, 0.0, 30.0), (0, 6, 0.0, 30.0)]);
    assert!((g.block(ids[1]).unwrap().pixel_y - 30.0).abs() < 0.001);
}

#[test]
fn serialized_layout() {
    let mut g = grid(GridOptions::default());
    g.add_block(BlockDescriptor::new(0, 3).with_external_id("a"));
    g.add_block(
        BlockDescriptor::new(3, 3)
            .with_height(120.0)
            .with_external_id("b"),
    );
    g.add_block(BlockDescriptor::new(-2, 9).with_y(1.0).with_external_id(7_i64));
    g.relayout();

    let json = serde_json::to_string_pretty(&g.to_json()).unwrap();
    insta::assert_snapshot!(json, @r###"
    [
      {
        "id": "a",
        "x_pos": 0,
        "y_pos": 0.0,
        "width": 3
      },
      {
        "id": "b",
        "x_pos": 3,
        "y_pos": 0.0,
        "width": 3,
        "height": 120.0
      },
      {
        "id": 7,
        "x_pos": 0,
        "y_pos": 1.0,
        "width": 6
      }
    ]
    "###);
}
