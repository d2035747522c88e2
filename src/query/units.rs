// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use regex::RegexBuilder;

use crate::model::{Object, StratGraph, Unit, UnitId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSearchMode {
    Substring,
    Regex,
}

/// Units whose label or description matches `needle`, in unit order. A blank needle matches
/// nothing.
pub fn search_units<'a>(
    graph: &'a StratGraph,
    needle: &str,
    mode: UnitSearchMode,
    case_insensitive: bool,
) -> Result<Vec<&'a Unit>, regex::Error> {
    if needle.trim().is_empty() {
        return Ok(Vec::new());
    }
    let units = graph.units().iter();
    match mode {
        UnitSearchMode::Substring => {
            if case_insensitive {
                let needle_lower = needle.to_lowercase();
                Ok(units
                    .filter(|unit| {
                        unit.label().to_lowercase().contains(&needle_lower)
                            || unit.description().to_lowercase().contains(&needle_lower)
                    })
                    .collect())
            } else {
                Ok(units
                    .filter(|unit| {
                        unit.label().contains(needle) || unit.description().contains(needle)
                    })
                    .collect())
            }
        }
        UnitSearchMode::Regex => {
            let regex = RegexBuilder::new(needle).case_insensitive(case_insensitive).build()?;
            Ok(units
                .filter(|unit| regex.is_match(unit.label()) || regex.is_match(unit.description()))
                .collect())
        }
    }
}

/// Every object the unit belongs to, in object order.
pub fn objects_for_unit<'a>(graph: &'a StratGraph, unit_id: &UnitId) -> Vec<&'a Object> {
    graph.objects().iter().filter(|object| object.contains(unit_id)).collect()
}

const LABEL_PREFIX: &str = "SU ";
const LABEL_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueLabel {
    pub label: String,
    /// Counter to pass to the next call.
    pub next_counter: u64,
}

/// First `SU nnn` label at or after `counter` that no unit uses yet (compared trimmed and
/// case-insensitively). The counter wraps from `u64::MAX` to 0.
pub fn next_unique_label(graph: &StratGraph, counter: u64) -> UniqueLabel {
    let taken = graph
        .units()
        .iter()
        .map(|unit| unit.label().trim().to_lowercase())
        .collect::<HashSet<_>>();

    let mut counter = counter;
    loop {
        let label = numbered_label(counter);
        counter = counter.wrapping_add(1);
        if !taken.contains(&label.to_lowercase()) {
            return UniqueLabel { label, next_counter: counter };
        }
    }
}

fn numbered_label(counter: u64) -> String {
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(counter);
    let mut label = String::with_capacity(LABEL_PREFIX.len() + LABEL_DIGITS.max(digits.len()));
    label.push_str(LABEL_PREFIX);
    for _ in digits.len()..LABEL_DIGITS {
        label.push('0');
    }
    label.push_str(digits);
    label
}
