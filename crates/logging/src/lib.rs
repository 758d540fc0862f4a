// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # trajview's Logging Setup
//!
//! Every trajview crate logs through the [`log`] facade.  This crate installs the backend: on
//! desktop platforms [`env_logger`] reads its configuration from the environment, in the browser
//! `console_log` forwards records to the Javascript console, and elsewhere nothing is installed.
//!
//! By default, the logging level is set to [`Info`](log::Level::Info) for debug builds, and
//! [`Warn`](log::Level::Warn) for release builds. This can be overridden by setting the `RUST_LOG`
//! environment variable, like so:
//!
//! ```sh
//! $> RUST_LOG=trajview=debug,trajview_bonding=debug trajview dump.lammpstrj
//! ```

mod platform;
mod platform_impl;
pub use platform::{default_level, init, init_with_level};

// End of File
