// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use log::{LevelFilter, SetLoggerError};

pub(crate) fn init_with_level(
    crates: &[&'static str],
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    let _ = crates;
    let Some(level) = level.to_level() else {
        // console_log does not have an "off" level, so just don't configure it.
        return Ok(());
    };
    console_log::init_with_level(level)
}

// End of File
