// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Phase-aware layered layout for Harris matrices.
//!
//! Units are stacked in one horizontal band per phase (youngest on top), ranked by their depth
//! inside the band, grouped into object and loose columns, and ordered with a median heuristic.

pub mod columns;
pub mod crossing;
pub mod engine;
pub mod outer;
pub mod position;
pub mod rank;
pub mod settings;

pub use columns::{BandColumns, Column, ColumnKind};
pub use crossing::{SweepDirection, CROSSING_PASSES};
pub use engine::{compute_layout, LayoutBand, LayoutColumn, MatrixLayout};
pub use position::{compile_positions, Point, ANCHOR_X, MIN_X, ORIGIN_Y};
pub use rank::{rank_bands, BandKey, RankedBand};
pub use settings::LayoutSettings;
