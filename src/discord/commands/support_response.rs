// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{CommandArgs, CommandParseError, SupportCommand};
use crate::model::Member;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_util::builder::command::{CommandBuilder, StringBuilder, UserBuilder};

pub const NAME: &str = "support_response";

// Responses are posted as an embed description, which Discord caps at this length.
const MAX_RESPONSE_LENGTH: u16 = 4096;

pub fn command_definition() -> Command {
	let member = UserBuilder::new("member", "The member to respond to")
		.required(true)
		.build();
	let response = StringBuilder::new("response", "The response to the inquiry")
		.required(true)
		.max_length(MAX_RESPONSE_LENGTH)
		.build();
	CommandBuilder::new(NAME, "Respond to an inquiry (support staff only)", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.option(member)
		.option(response)
		.build()
}

pub fn parse(args: &CommandArgs) -> Result<SupportCommand, CommandParseError> {
	let target_id = args.user("member")?;
	let Some(display_name) = args.members.get(&target_id) else {
		return Err(CommandParseError::NotAMember(target_id));
	};
	let response = args.string("response")?;
	if response.trim().is_empty() {
		return Err(CommandParseError::EmptyResponse);
	}

	Ok(SupportCommand::Respond {
		target: Member {
			id: target_id,
			display_name: display_name.clone(),
		},
		response: response.to_string(),
	})
}
