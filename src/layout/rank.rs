// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;

use crate::model::{Adjacency, StratGraph};

/// Which horizontal band of the layout a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BandKey {
    /// A real phase, by its index in the phase list.
    Phase(usize),
    /// Pseudo-phase after all real phases: no phase, or a phase id that does not resolve.
    Unphased,
}

/// The units of one band and their topological depth inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedBand {
    key: BandKey,
    slots: Vec<usize>,
    ranks: Vec<usize>,
}

impl RankedBand {
    pub fn key(&self) -> BandKey {
        self.key
    }

    /// Arena slots of the band's units, in unit order.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `(slot, rank)` pairs in unit order.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots.iter().copied().zip(self.ranks.iter().copied())
    }

    pub fn max_rank(&self) -> usize {
        self.ranks.iter().copied().max().unwrap_or(0)
    }
}

/// Groups units into bands (every real phase in order, then the unphased band when it has units)
/// and ranks each band independently.
pub fn rank_bands(graph: &StratGraph, adjacency: &Adjacency) -> Vec<RankedBand> {
    let phase_count = graph.phases().len();
    let band_of = graph
        .units()
        .iter()
        .map(|unit| graph.unit_phase_index(unit).unwrap_or(phase_count))
        .collect::<Vec<_>>();

    let mut members = vec![Vec::<usize>::new(); phase_count + 1];
    for (slot, &band) in band_of.iter().enumerate() {
        members[band].push(slot);
    }

    let mut bands = Vec::with_capacity(phase_count + 1);
    for (band, slots) in members.into_iter().enumerate() {
        let key = if band < phase_count { BandKey::Phase(band) } else { BandKey::Unphased };
        if key == BandKey::Unphased && slots.is_empty() {
            continue;
        }
        let ranks = rank_band(&slots, band, &band_of, adjacency);
        bands.push(RankedBand { key, slots, ranks });
    }
    bands
}

/// Longest-path depth over the relations internal to one band (Kahn's algorithm).
///
/// Units caught in an internal cycle are never dequeued and keep rank 0; flagging the cycle is
/// the validator's job.
fn rank_band(slots: &[usize], band: usize, band_of: &[usize], adjacency: &Adjacency) -> Vec<usize> {
    let local = |slot: usize| slots.binary_search(&slot).ok();

    let mut in_degree = vec![0usize; slots.len()];
    let mut internal = vec![Vec::<usize>::new(); slots.len()];
    for (local_idx, &slot) in slots.iter().enumerate() {
        for &target in adjacency.successors(slot) {
            if band_of[target] != band {
                continue;
            }
            let Some(target_idx) = local(target) else {
                continue;
            };
            internal[local_idx].push(target_idx);
            in_degree[target_idx] += 1;
        }
    }

    let mut ranks = vec![0usize; slots.len()];
    let mut queue = (0..slots.len()).filter(|&idx| in_degree[idx] == 0).collect::<VecDeque<_>>();
    while let Some(current) = queue.pop_front() {
        for &target in &internal[current] {
            ranks[target] = ranks[target].max(ranks[current] + 1);
            in_degree[target] -= 1;
            if in_degree[target] == 0 {
                queue.push_back(target);
            }
        }
    }
    ranks
}
