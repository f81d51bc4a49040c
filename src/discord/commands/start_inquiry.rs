// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{CommandArgs, CommandParseError, SupportCommand};
use crate::discord::utils::tickets::MAX_TICKET_TITLE_LENGTH;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_util::builder::command::{CommandBuilder, StringBuilder};

pub const NAME: &str = "start_inquiry";

pub fn command_definition() -> Command {
	let title = StringBuilder::new("title", "What the inquiry is about")
		.required(true)
		.max_length(MAX_TICKET_TITLE_LENGTH)
		.build();
	CommandBuilder::new(NAME, "Open a new private inquiry channel", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.option(title)
		.build()
}

pub fn parse(args: &CommandArgs) -> Result<SupportCommand, CommandParseError> {
	let title = args.string("title")?.trim();
	if title.is_empty() {
		return Err(CommandParseError::EmptyTitle);
	}
	if title.chars().count() > usize::from(MAX_TICKET_TITLE_LENGTH) {
		return Err(CommandParseError::TitleTooLong);
	}
	Ok(SupportCommand::Start {
		title: title.to_string(),
	})
}
