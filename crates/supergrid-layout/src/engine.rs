//! The grid engine.
//!
//! [`SuperGrid`] owns the blocks and turns gesture intents into positions.
//! Every public operation runs to completion and never fails: bad input is
//! clamped, stale ids are logged and ignored.

use supergrid_core::{
    Block, BlockDescriptor, BlockError, BlockId, BlockRecord, BlockSet, GridError, GridOptions,
    PixelPoint, PixelRect,
};

use crate::active::{ActiveBlock, Pointer};
use crate::gaps::{find_open_spaces, OpenSpace};
use crate::geometry::Geometry;
use crate::host::{ContentMeasure, GridEvents, LayoutFrame, Placement, ResizeHandles};
use crate::pack::pack_blocks;
use crate::serialize::{records_to_json, to_records};
use crate::strategy::strategy_for;

/// An interactive six-track grid.
pub struct SuperGrid<M, E = ()> {
    options: GridOptions,
    blocks: BlockSet,
    measure: M,
    events: E,
    geometry: Geometry,
    collapsed: bool,
    container_height: f64,
    active: Option<ActiveBlock>,
    deferred_pending: bool,
}

impl<M: ContentMeasure, E: GridEvents> SuperGrid<M, E> {
    /// Create an empty grid.
    pub fn new(options: GridOptions, measure: M, events: E) -> Self {
        Self::with_blocks(options, measure, events, std::iter::empty())
    }

    /// Create a grid populated with `descriptors`, in order.
    ///
    /// The container width is measured and a first layout pass runs
    /// immediately. A second pass is left pending for [`Self::run_deferred`],
    /// once the host has had a chance to settle content sizes.
    pub fn with_blocks<I>(options: GridOptions, measure: M, events: E, descriptors: I) -> Self
    where
        I: IntoIterator<Item = BlockDescriptor>,
    {
        let width = measure.measure_container_width();
        let mut grid = Self {
            options,
            blocks: BlockSet::new(),
            measure,
            events,
            geometry: Geometry::new(width),
            collapsed: false,
            container_height: 0.0,
            active: None,
            deferred_pending: true,
        };

        for descriptor in descriptors {
            grid.add_block(descriptor);
        }
        grid.apply_container_width(width);
        grid
    }

    /// Rebuild a grid from serialized records.
    pub fn from_records(
        options: GridOptions,
        measure: M,
        events: E,
        records: &[BlockRecord],
    ) -> Self {
        Self::with_blocks(
            options,
            measure,
            events,
            records.iter().map(BlockDescriptor::from),
        )
    }

    // ---- Accessors ----

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn blocks(&self) -> &BlockSet {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Height of the laid-out grid after the last pass.
    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Block under the current gesture, if any.
    pub fn active_block(&self) -> Option<BlockId> {
        self.active.map(|a| a.id)
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    pub fn measure_mut(&mut self) -> &mut M {
        &mut self.measure
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    // ---- Block management ----

    /// Register a block. Geometry is clamped into the grid; no layout pass
    /// runs until the next [`Self::relayout`].
    pub fn add_block(&mut self, descriptor: BlockDescriptor) -> BlockId {
        let id = self.blocks.insert(&descriptor);
        log::debug!("added block {id}");
        id
    }

    /// Remove a block. Its id is never handed out again. Clears the active
    /// gesture if it targeted this block.
    pub fn remove_block(&mut self, id: BlockId) -> Option<Block> {
        let Some(block) = self.blocks.remove(id) else {
            log::warn!("remove ignored: {}", BlockError::UnknownBlock { id });
            return None;
        };
        if self.active_block() == Some(id) {
            self.active = None;
            self.events.on_placeholder(None);
        }
        Some(block)
    }

    /// Resize handles the gesture layer may offer for a block; `None` for a
    /// static grid or an unknown id.
    pub fn resize_handles(&self, id: BlockId) -> Option<ResizeHandles> {
        if self.options.static_grid {
            return None;
        }
        let block = self.blocks.get(id)?;
        let horizontal = self.options.resizable_block_width || block.resizable_width;
        let vertical =
            (self.options.resizable_block_height || block.resizable_height) && block.fixed_height;
        Some(ResizeHandles {
            east: horizontal,
            west: horizontal,
            south: vertical,
        })
    }

    // ---- Layout ----

    /// Recompute every block's position.
    pub fn relayout(&mut self) {
        self.layout(false, false);
    }

    /// Run the one-shot deferred layout scheduled at construction and fire
    /// `on_loaded`. Returns `false` if it already ran.
    pub fn run_deferred(&mut self) -> bool {
        if !std::mem::take(&mut self.deferred_pending) {
            return false;
        }
        self.relayout();
        self.events.on_loaded();
        true
    }

    /// Re-measure the container after the host window changed size.
    pub fn container_resized(&mut self) {
        let width = self.measure.measure_container_width();
        if width != self.geometry.container_width() {
            self.apply_container_width(width);
        }
    }

    fn apply_container_width(&mut self, width: f64) {
        self.geometry = Geometry::new(width);

        let collapse = width <= self.options.collapse_container_width;
        if collapse != self.collapsed {
            log::debug!(
                "container width {width}: {}",
                if collapse { "collapsing" } else { "expanding" }
            );
            self.collapsed = collapse;
            self.events.on_collapse(collapse);
        }

        self.relayout();
    }

    /// One full pass. `resizing` withholds horizontal offsets; `finishing`
    /// reports the active block's resting geometry before it is released.
    fn layout(&mut self, resizing: bool, finishing: bool) {
        if self.collapsed {
            return;
        }

        self.measure_heights();
        let strategy = strategy_for(self.options.layout_policy);

        if let Some(active) = self.active {
            match active.snap(&mut self.blocks, &self.geometry, &self.options) {
                Ok(()) => strategy.resolve_active(&mut self.blocks, &active),
                Err(err) => {
                    log::warn!("dropping active gesture: {err}");
                    self.active = None;
                }
            }
        }

        if finishing {
            if let Some(block) = self.active.and_then(|a| self.blocks.get(a.id)) {
                self.events.on_commit(block);
            }
        }

        self.container_height = strategy.arrange(&mut self.blocks, self.active.as_ref());
        self.emit(resizing);

        if !finishing {
            if let Some(block) = self.active.and_then(|a| self.blocks.get(a.id)) {
                let outline = block.pixel_rect(self.geometry.column_width());
                self.events.on_placeholder(Some(outline));
            }
        }
    }

    fn measure_heights(&mut self) {
        for block in self.blocks.iter_mut().filter(|b| !b.fixed_height) {
            let height = self.measure.measure_content_height(block.id);
            block.pixel_height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        }
    }

    fn emit(&mut self, resizing: bool) {
        let geometry = self.geometry;
        let placements = self
            .blocks
            .iter()
            .map(|b| Placement::new(b, (!resizing).then(|| geometry.column_to_pixels(b.x))))
            .collect();
        self.events.on_layout(&LayoutFrame {
            placements,
            container_height: self.container_height,
        });
    }

    // ---- Gestures ----

    pub fn drag_start(&mut self, id: BlockId) {
        report("drag start", self.begin(id));
    }

    pub fn drag(&mut self, id: BlockId, position: PixelPoint) {
        report("drag", self.update(id, Pointer::Drag(position)));
    }

    pub fn drag_stop(&mut self, id: BlockId, position: PixelPoint) {
        report("drag stop", self.finish(id, Pointer::Drag(position)));
    }

    pub fn resize_start(&mut self, id: BlockId) {
        report("resize start", self.begin(id));
    }

    pub fn resize(&mut self, id: BlockId, rect: PixelRect) {
        report("resize", self.update(id, Pointer::Resize(rect)));
    }

    pub fn resize_stop(&mut self, id: BlockId, rect: PixelRect) {
        report("resize stop", self.finish(id, Pointer::Resize(rect)));
    }

    fn begin(&mut self, id: BlockId) -> Result<(), GridError> {
        if self.options.static_grid {
            return Err(BlockError::StaticGrid.into());
        }
        let block = self.blocks.get(id).ok_or(BlockError::UnknownBlock { id })?;
        let outline = block.pixel_rect(self.geometry.column_width());

        if let Some(previous) = self.active.replace(ActiveBlock::new(id)) {
            log::debug!("block {} replaces unfinished gesture on {}", id, previous.id);
        }
        self.events.on_placeholder(Some(outline));
        Ok(())
    }

    fn active_for(&mut self, id: BlockId) -> Result<&mut ActiveBlock, GridError> {
        if self.options.static_grid {
            return Err(BlockError::StaticGrid.into());
        }
        match self.active.as_mut() {
            Some(active) if active.id == id => Ok(active),
            Some(active) => Err(BlockError::NotActive {
                id,
                active: Some(active.id),
            }
            .into()),
            None => Err(BlockError::NoActiveBlock.into()),
        }
    }

    fn update(&mut self, id: BlockId, pointer: Pointer) -> Result<(), GridError> {
        self.active_for(id)?.pointer = Some(pointer);
        self.layout(matches!(pointer, Pointer::Resize(_)), false);
        Ok(())
    }

    fn finish(&mut self, id: BlockId, pointer: Pointer) -> Result<(), GridError> {
        self.active_for(id)?.pointer = Some(pointer);
        self.layout(false, true);

        self.active = None;
        self.events.on_placeholder(None);
        self.events.on_change();
        Ok(())
    }

    // ---- Queries and compaction ----

    /// Free rectangles in the current layout.
    ///
    /// `min_height` defaults to the `min_block_height` option and
    /// `end_space_height` to zero (no trailing spaces).
    pub fn open_spaces(
        &mut self,
        min_height: Option<f64>,
        end_space_height: Option<f64>,
    ) -> Vec<OpenSpace> {
        self.relayout();
        find_open_spaces(
            &self.blocks,
            self.active_block(),
            min_height.unwrap_or(self.options.min_block_height),
            end_space_height.unwrap_or(0.0),
        )
    }

    /// Compact every block into the lowest, then leftmost, free slot.
    pub fn pack(&mut self) {
        self.relayout();
        let before = self.container_height;
        let active = self.active_block();
        let packed = pack_blocks(&mut self.blocks, active);
        self.relayout();
        log::debug!("packed {} blocks: height {before} -> {packed}", self.blocks.len());
        self.events.on_change();
    }

    /// Positional records for every block.
    pub fn to_json(&self) -> Vec<BlockRecord> {
        to_records(&self.blocks)
    }

    /// [`Self::to_json`] rendered as a JSON string.
    pub fn to_json_string(&self) -> String {
        records_to_json(&self.to_json()).unwrap_or_else(|err| {
            log::error!("failed to serialize grid: {err}");
            "[]".to_string()
        })
    }
}

fn report(operation: &str, result: Result<(), GridError>) {
    match result {
        Ok(()) => {}
        Err(GridError::Block(BlockError::StaticGrid)) => {
            log::debug!("{operation} ignored on static grid");
        }
        Err(err) => log::warn!("{operation} ignored: {err}"),
    }
}
