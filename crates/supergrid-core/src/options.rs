//! Grid configuration.

use std::fmt;
use std::str::FromStr;

use crate::errors::PolicyError;

/// Strategy used to turn block ordering keys into positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum LayoutPolicy {
    /// Gravity stacking: each block settles on the lowest free pixel row
    /// across its columns. `y` is an abstract row rank.
    #[default]
    Classic,
    /// Row flow: blocks fill a row left to right and wrap like inline text.
    /// `y` is a pixel offset.
    PackedRows,
}

impl LayoutPolicy {
    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::PackedRows => "packed_rows",
        }
    }

    /// Parse a policy name, falling back to [`LayoutPolicy::Classic`] for
    /// anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: PolicyError| {
            log::warn!("{err}; falling back to classic layout");
            Self::Classic
        })
    }
}

impl FromStr for LayoutPolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "packed_rows" => Ok(Self::PackedRows),
            _ => Err(PolicyError::Unknown {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LayoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for LayoutPolicy {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<LayoutPolicy> for String {
    fn from(policy: LayoutPolicy) -> Self {
        policy.name().to_string()
    }
}

/// Options for a grid engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GridOptions {
    /// Ignore every drag and resize gesture
    pub static_grid: bool,
    /// Offer horizontal resize handles on every block
    pub resizable_block_width: bool,
    /// Offer a vertical resize handle on every fixed-height block
    pub resizable_block_height: bool,
    /// Narrowest column span a resize may produce
    pub min_block_width: usize,
    /// Smallest pixel height a resize may produce; also the default
    /// minimum gap height for open-space queries
    pub min_block_height: f64,
    /// At or below this container width the grid collapses to one column
    pub collapse_container_width: f64,
    /// Resized heights are rounded up to a multiple of this
    pub height_snap_increment: Option<f64>,
    /// Layout strategy
    #[cfg_attr(feature = "serde", serde(alias = "layout"))]
    pub layout_policy: LayoutPolicy,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            static_grid: true,
            resizable_block_width: false,
            resizable_block_height: false,
            min_block_width: 1,
            min_block_height: 50.0,
            collapse_container_width: 700.0,
            height_snap_increment: None,
            layout_policy: LayoutPolicy::Classic,
        }
    }
}

impl GridOptions {
    /// Interactive grid: drag enabled, resizing off.
    pub fn interactive() -> Self {
        Self {
            static_grid: false,
            ..Default::default()
        }
    }

    pub fn with_policy(mut self, policy: LayoutPolicy) -> Self {
        self.layout_policy = policy;
        self
    }

    pub fn with_resizable(mut self, width: bool, height: bool) -> Self {
        self.resizable_block_width = width;
        self.resizable_block_height = height;
        self
    }

    pub fn with_min_block_size(mut self, width: usize, height: f64) -> Self {
        self.min_block_width = width;
        self.min_block_height = height;
        self
    }

    pub fn with_height_snap(mut self, increment: f64) -> Self {
        self.height_snap_increment = Some(increment);
        self
    }

    pub fn with_collapse_width(mut self, width: f64) -> Self {
        self.collapse_container_width = width;
        self
    }

    /// Apply the minimum height and snap increment to a proposed pixel height.
    pub fn snap_height(&self, height: f64) -> f64 {
        let height = height.max(self.min_block_height);
        match self.height_snap_increment {
            Some(step) if step > 0.0 => (height / step).ceil() * step,
            _ => height,
        }
    }
}
