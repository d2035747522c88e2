// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Strata: Harris matrix core.
//!
//! Phase-aware layered layout of stratigraphic units ([`layout::compute_layout`]) and
//! stratigraphic consistency checks ([`validate::validate_stratigraphy`]), plus the document
//! model, edit operations, queries and JSON persistence around them.

pub mod config;
pub mod layout;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;
pub mod validate;
