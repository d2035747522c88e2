// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a matrix snapshot.
//!
//! Queries provide derived views (search hits, memberships, phase strips, fresh labels) for
//! callers that edit or display a matrix.

pub mod phases;
pub mod units;

pub use phases::{phase_extents, PhaseExtent};
pub use units::{next_unique_label, objects_for_unit, search_units, UniqueLabel, UnitSearchMode};
