// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod commands;
mod connection;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod http_platform;
pub mod lifecycle;
pub mod platform;
pub mod state;
pub mod utils;

pub use connection::{run_bot, set_up_client};
