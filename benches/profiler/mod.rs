// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Criterion config shared by all bench targets; a flamegraph is written per case when run with
// `--profile-time`.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let frequency = env_parse::<i32>("STRATA_PROFILE_FREQ", 100).clamp(1, 1000);
    let sample_size = env_parse::<usize>("STRATA_BENCH_SAMPLES", 50).clamp(10, 200);
    let warmup_secs = env_parse::<u64>("STRATA_BENCH_WARMUP_SECS", 2).clamp(1, 60);
    let measurement_secs = env_parse::<u64>("STRATA_BENCH_MEASUREMENT_SECS", 5).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
