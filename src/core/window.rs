use crate::core::motion::{T_MAX, VertexPoint};

pub const Y_HEADROOM_M: f64 = 15.0;
pub const Y_FLOOR_M: f64 = 70.0; // keeps low launches from squashing the chart

/// Data-space extents of the chart. Both axes start at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub x_max: f64,
    pub y_max: f64,
}

impl PlotWindow {
    pub fn for_vertex(vertex: VertexPoint) -> Self {
        Self {
            x_max: T_MAX,
            y_max: (vertex.height_m + Y_HEADROOM_M).max(Y_FLOOR_M),
        }
    }
}
