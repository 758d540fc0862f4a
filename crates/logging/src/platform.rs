// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use log::{LevelFilter, SetLoggerError};

/// [`Info`](LevelFilter::Info) in debug builds, [`Warn`](LevelFilter::Warn) in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Installs the platform logger for the listed crates (by module path, e.g.
/// `trajview_trajectory`) at the [`default_level`].  Fails if a logger was already installed.
pub fn init(crates: &[&'static str]) -> Result<(), SetLoggerError> {
    init_with_level(crates, default_level())
}

/// Same as [`init`], with an explicit minimum level.  On desktop platforms `RUST_LOG` still takes
/// precedence when it is set.
pub fn init_with_level(crates: &[&'static str], level: LevelFilter) -> Result<(), SetLoggerError> {
    crate::platform_impl::init_with_level(crates, level)
}

/// Builds an `env_logger`-style filter enabling `level` for each crate.
#[cfg_attr(not(any(target_os = "linux", target_os = "macos", target_os = "windows")), allow(dead_code))]
pub(crate) fn filter_string(crates: &[&'static str], level: LevelFilter) -> String {
    let level = level.as_str().to_lowercase();
    crates
        .iter()
        .map(|name| format!("{}={}", name, level))
        .collect::<Vec<_>>()
        .join(",")
}


// End of File
