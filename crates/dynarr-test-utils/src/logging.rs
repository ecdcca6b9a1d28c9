// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a tracing subscriber that writes through the test harness.
///
/// Defaults to `trace` when `RUST_LOG` is unset. Safe to call from every
/// test: only the first call installs the subscriber.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}
