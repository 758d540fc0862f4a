// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use log::{LevelFilter, SetLoggerError};

pub(crate) fn init_with_level(
    crates: &[&'static str],
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    let filter = crate::platform::filter_string(crates, level);

    // Use env_logger's builder API to avoid an unsafe set_var call.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).try_init()
}

// End of File
