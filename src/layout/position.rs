// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::columns::{row_width, BandColumns};
use super::settings::LayoutSettings;
use crate::model::NODE_HEIGHT;

/// Top edge of the first band.
pub const ORIGIN_Y: f64 = 50.0;
/// Horizontal anchor every band is centered on.
pub const ANCHOR_X: f64 = 400.0;
/// Bands wider than the canvas are pinned to this left edge instead of being centered.
pub const MIN_X: f64 = 50.0;

/// Top-left corner of a unit box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Left-to-right column order of one band, as indices into its column list.
pub type ColumnOrder = Vec<usize>;

/// Unit positions indexed by arena slot.
pub type SlotPositions = Vec<Option<Point>>;

/// Horizontal center of a placed unit box.
pub fn center_x(positions: &SlotPositions, widths: &[f64], slot: usize) -> Option<f64> {
    positions.get(slot).copied().flatten().map(|point| point.x + widths[slot] / 2.0)
}

/// Turns column orders into absolute coordinates.
///
/// Bands stack top to bottom. Band `n > 0` starts `phase_gap` below the previous band's last row;
/// a band without units takes no space and adds no gap. Rows inside a band are
/// `NODE_HEIGHT + vertical_gap` apart. Columns are centered on [`ANCHOR_X`] and each cell is
/// centered inside its column.
pub fn compile_positions(
    bands: &[BandColumns],
    orders: &[ColumnOrder],
    widths: &[f64],
    settings: &LayoutSettings,
) -> SlotPositions {
    let mut positions = vec![None; widths.len()];
    let mut current_y = ORIGIN_Y;

    for (band_idx, (band, order)) in bands.iter().zip(orders).enumerate() {
        if band.is_empty() {
            continue;
        }
        if band_idx > 0 {
            current_y += settings.phase_gap;
        }

        let columns = order.iter().map(|&idx| &band.columns()[idx]).collect::<Vec<_>>();
        let gap_after = |pos: usize| {
            if columns[pos].is_object() || columns[pos + 1].is_object() {
                settings.object_gap()
            } else {
                settings.horizontal_gap
            }
        };

        let mut total_width = 0.0;
        for pos in 0..columns.len() {
            total_width += columns[pos].width();
            if pos + 1 < columns.len() {
                total_width += gap_after(pos);
            }
        }

        let mut column_x = Vec::with_capacity(columns.len());
        let mut x = MIN_X.max(ANCHOR_X - total_width / 2.0);
        for pos in 0..columns.len() {
            column_x.push(x);
            x += columns[pos].width();
            if pos + 1 < columns.len() {
                x += gap_after(pos);
            }
        }

        let band_top = current_y;
        for rank in 0..=band.max_rank() {
            let row_y = band_top + rank as f64 * (NODE_HEIGHT + settings.vertical_gap);
            for (pos, column) in columns.iter().enumerate() {
                let cell = column.cell(rank);
                let used = row_width(cell, widths, settings.horizontal_gap);
                let mut node_x = column_x[pos] + (column.width() - used) / 2.0;
                for &slot in cell {
                    positions[slot] = Some(Point::new(node_x, row_y));
                    node_x += widths[slot] + settings.horizontal_gap;
                }
            }
            current_y = row_y + NODE_HEIGHT;
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::{compile_positions, Point, SlotPositions};
    use crate::layout::columns::build_columns;
    use crate::layout::rank::rank_bands;
    use crate::layout::LayoutSettings;
    use crate::model::fixtures::GraphBuilder;
    use crate::model::StratGraph;

    fn compile(graph: &StratGraph, settings: &LayoutSettings) -> SlotPositions {
        let adjacency = graph.adjacency();
        let widths = graph.units().iter().map(|unit| unit.width()).collect::<Vec<_>>();
        let bands = rank_bands(graph, &adjacency)
            .iter()
            .map(|band| build_columns(graph, band, &widths, settings))
            .collect::<Vec<_>>();
        let orders = bands.iter().map(|band| (0..band.columns().len()).collect()).collect::<Vec<_>>();
        compile_positions(&bands, &orders, &widths, settings)
    }

    #[test]
    fn single_unit_is_centered_on_the_anchor() {
        let graph = GraphBuilder::new().phase("p1").unit("a", "SU 001", Some("p1")).build();
        let positions = compile(&graph, &LayoutSettings::default());
        assert_eq!(positions, vec![Some(Point::new(400.0 - 57.0 / 2.0, 50.0))]);
    }

    #[test]
    fn rows_and_bands_stack_with_their_gaps() {
        let graph = GraphBuilder::new()
            .phase("p1")
            .phase("p2")
            .unit("a", "SU 001", Some("p1"))
            .unit("b", "SU 002", Some("p1"))
            .unit("c", "SU 003", Some("p2"))
            .rel("ab", "a", "b")
            .build();
        let positions = compile(&graph, &LayoutSettings::default());

        let y = |slot: usize| positions[slot].expect("placed").y();
        assert_eq!(y(0), 50.0);
        // one row down: 28 + 50
        assert_eq!(y(1), 128.0);
        // band 2 starts at the end of the last row plus the phase gap: 128 + 28 + 70
        assert_eq!(y(2), 226.0);
    }

    #[test]
    fn empty_leading_band_still_triggers_the_phase_gap() {
        let graph = GraphBuilder::new()
            .phase("p1")
            .phase("p2")
            .unit("a", "SU 001", Some("p2"))
            .build();
        let positions = compile(&graph, &LayoutSettings::default());
        assert_eq!(positions[0].expect("placed").y(), 120.0);
    }

    #[test]
    fn object_columns_get_the_wider_gap() {
        let graph = GraphBuilder::new()
            .phase("p1")
            .unit("a", "SU 001", Some("p1"))
            .unit("b", "SU 002", Some("p1"))
            .unit("c", "SU 003", Some("p1"))
            .object("wall", &["a"])
            .build();
        let positions = compile(&graph, &LayoutSettings::default());
        let x = |slot: usize| positions[slot].expect("placed").x();

        // wall | 60 | b | 20 | c  ->  57 * 3 + 80 = 251 wide
        let start = 400.0 - 251.0 / 2.0;
        assert_eq!(x(0), start);
        assert_eq!(x(1), start + 57.0 + 60.0);
        assert_eq!(x(2), start + 57.0 + 60.0 + 57.0 + 20.0);
    }

    #[test]
    fn wide_bands_are_pinned_to_the_left_margin() {
        let mut builder = GraphBuilder::new().phase("p1");
        for idx in 0..20 {
            let id = format!("u{idx}");
            builder = builder.unit(&id, &format!("Context {idx:02}"), Some("p1"));
        }
        let positions = compile(&builder.build(), &LayoutSettings::default());
        let leftmost = positions.iter().flatten().map(|point| point.x()).fold(f64::MAX, f64::min);
        assert_eq!(leftmost, 50.0);
    }

    #[test]
    fn narrow_cells_are_centered_inside_their_column() {
        let graph = GraphBuilder::new()
            .phase("p1")
            .unit("a", "Robber trench", Some("p1"))
            .unit("b", "SU 002", Some("p1"))
            .rel("ab", "a", "b")
            .object("pit", &["a", "b"])
            .build();
        let positions = compile(&graph, &LayoutSettings::default());
        let a = positions[0].expect("placed");
        let b = positions[1].expect("placed");
        assert_eq!(a.x(), 400.0 - 147.0 / 2.0);
        assert_eq!(b.x(), a.x() + (147.0 - 57.0) / 2.0);
    }
}
