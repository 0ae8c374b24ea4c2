//! Flow-graph layout: geometry, per-scope placement and nested sizing.

pub mod geom;
pub mod layout;
pub mod rank;

pub use geom::{Point, Rect, Size};
pub use layout::{FlowLayout, LayoutConfig};
pub use rank::{AutoLayout, RankedLayout};
