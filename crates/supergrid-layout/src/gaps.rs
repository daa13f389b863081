//! Open-space discovery.
//!
//! Replays the settled layout column by column and reports the empty
//! rectangles left above each block, merging neighbouring columns whose gap
//! has the same top and height.

use supergrid_core::{BlockId, BlockSet, TRACK_COUNT};

use crate::strategy::{priority_order, Skyline};

/// A free, column-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpenSpace {
    /// First column
    pub x: usize,
    /// Pixel top
    pub y: f64,
    /// Columns spanned
    pub width: usize,
    /// Pixel height
    pub height: f64,
}

/// Gap being grown across columns.
#[derive(Debug, Clone, Copy)]
struct Run {
    x: usize,
    y: f64,
    height: f64,
}

impl Run {
    fn close(self, end: usize) -> OpenSpace {
        OpenSpace {
            x: self.x,
            y: self.y,
            width: end - self.x,
            height: self.height,
        }
    }
}

/// Find gaps in an already laid-out block set.
///
/// Gaps shorter than `min_height` (or empty) are dropped. With a positive
/// `end_space_height`, every run of columns sharing a bottom also gets a
/// trailing space of exactly that height below its lowest block.
pub fn find_open_spaces(
    blocks: &BlockSet,
    active: Option<BlockId>,
    min_height: f64,
    end_space_height: f64,
) -> Vec<OpenSpace> {
    let mut spaces = Vec::new();
    let mut bottoms = Skyline::new();

    let flush = |run: Option<Run>, end: usize, spaces: &mut Vec<OpenSpace>| {
        if let Some(run) = run {
            if run.height > 0.0 && run.height >= min_height {
                spaces.push(run.close(end));
            }
        }
    };

    for id in priority_order(blocks, active) {
        let Some(block) = blocks.get(id) else {
            continue;
        };
        let span = block.span();
        let mut run: Option<Run> = None;

        for column in span.columns() {
            let top = bottoms.level(column);
            let height = block.pixel_y - top;
            let starts_new = run.map_or(true, |r| r.y != top || r.height != height);
            if starts_new {
                flush(run.take(), column, &mut spaces);
                run = Some(Run {
                    x: column,
                    y: top,
                    height,
                });
            }
        }
        flush(run, span.end(), &mut spaces);

        bottoms.settle(span, block.pixel_bottom());
    }

    if end_space_height > 0.0 {
        let mut run: Option<Run> = None;
        for column in 0..TRACK_COUNT {
            let top = bottoms.level(column);
            if run.map_or(true, |r| r.y != top) {
                if let Some(done) = run.take() {
                    spaces.push(done.close(column));
                }
                run = Some(Run {
                    x: column,
                    y: top,
                    height: end_space_height,
                });
            }
        }
        if let Some(done) = run {
            spaces.push(done.close(TRACK_COUNT));
        }
    }

    spaces
}
