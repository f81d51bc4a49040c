// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_util::builder::command::CommandBuilder;

pub const NAME: &str = "close_inquiry";

pub fn command_definition() -> Command {
	CommandBuilder::new(NAME, "Close this inquiry and delete its channel", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.build()
}
