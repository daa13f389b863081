#![allow(dead_code)]

use supergrid_layout::{
    Block, BlockDescriptor, BlockId, FixedMeasure, GridEvents, GridOptions, LayoutFrame,
    PixelRect, SuperGrid,
};

pub const CONTAINER_WIDTH: f64 = 1200.0;

/// Events sink that keeps everything it is told.
#[derive(Debug, Default)]
pub struct Recorder {
    pub frames: Vec<LayoutFrame>,
    pub placeholders: Vec<Option<PixelRect>>,
    pub commits: Vec<Block>,
    pub collapses: Vec<bool>,
    pub changes: usize,
    pub loaded: usize,
}

impl GridEvents for Recorder {
    fn on_layout(&mut self, frame: &LayoutFrame) {
        self.frames.push(frame.clone());
    }

    fn on_placeholder(&mut self, placeholder: Option<PixelRect>) {
        self.placeholders.push(placeholder);
    }

    fn on_commit(&mut self, block: &Block) {
        self.commits.push(block.clone());
    }

    fn on_collapse(&mut self, collapsed: bool) {
        self.collapses.push(collapsed);
    }

    fn on_change(&mut self) {
        self.changes += 1;
    }

    fn on_loaded(&mut self) {
        self.loaded += 1;
    }
}

pub type TestGrid = SuperGrid<FixedMeasure, Recorder>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Grid on a 1200px container where unmeasured content is 100px tall.
pub fn grid(options: GridOptions) -> TestGrid {
    init_logging();
    let measure = FixedMeasure::new(CONTAINER_WIDTH).with_default_height(100.0);
    SuperGrid::new(options, measure, Recorder::default())
}

/// Add fixed-height blocks and run a layout pass.
pub fn populate(grid: &mut TestGrid, blocks: &[(i64, i64, f64, f64)]) -> Vec<BlockId> {
    let ids = blocks
        .iter()
        .map(|&(x, width, y, height)| {
            grid.add_block(BlockDescriptor::new(x, width).with_y(y).with_height(height))
        })
        .collect();
    grid.relayout();
    ids
}

/// `(x, width, pixel_y, pixel_height)` of every block in insertion order.
pub fn positions(grid: &TestGrid) -> Vec<(usize, usize, f64, f64)> {
    grid.blocks()
        .iter()
        .map(|b| (b.x, b.width, b.pixel_y, b.pixel_height))
        .collect()
}
