// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::Member;
use std::collections::HashMap;
use std::fmt;
use twilight_mention::fmt::Mention;
use twilight_model::application::command::Command;
use twilight_model::application::interaction::application_command::{CommandDataOption, CommandOptionValue};
use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;

mod close;
mod start_inquiry;
mod support_response;

pub fn command_definitions() -> Vec<Command> {
	vec![
		close::command_definition(),
		start_inquiry::command_definition(),
		support_response::command_definition(),
	]
}

/// A recognized command with its arguments validated
#[derive(Clone, Debug)]
pub enum SupportCommand {
	Start { title: String },
	Respond { target: Member, response: String },
	Close,
}

/// The raw arguments a command was invoked with
#[derive(Clone, Debug, Default)]
pub struct CommandArgs {
	pub options: Vec<CommandDataOption>,
	/// Display names of the guild members referenced by the options, as resolved by Discord.
	/// Users who aren't members of the guild are left out.
	pub members: HashMap<Id<UserMarker>, String>,
}

impl CommandArgs {
	fn value(&self, name: &str) -> Option<&CommandOptionValue> {
		self.options
			.iter()
			.find(|option| option.name == name)
			.map(|option| &option.value)
	}

	fn string(&self, name: &'static str) -> Result<&str, CommandParseError> {
		match self.value(name) {
			Some(CommandOptionValue::String(value)) => Ok(value.as_str()),
			Some(_) => Err(CommandParseError::WrongOptionType(name)),
			None => Err(CommandParseError::MissingOption(name)),
		}
	}

	fn user(&self, name: &'static str) -> Result<Id<UserMarker>, CommandParseError> {
		match self.value(name) {
			Some(CommandOptionValue::User(user_id)) => Ok(*user_id),
			Some(_) => Err(CommandParseError::WrongOptionType(name)),
			None => Err(CommandParseError::MissingOption(name)),
		}
	}
}

#[derive(Debug, Eq, PartialEq)]
pub enum CommandParseError {
	UnknownCommand(String),
	MissingOption(&'static str),
	WrongOptionType(&'static str),
	EmptyTitle,
	TitleTooLong,
	EmptyResponse,
	NotAMember(Id<UserMarker>),
}

impl std::error::Error for CommandParseError {}

impl fmt::Display for CommandParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnknownCommand(name) => write!(f, "unknown command {}", name),
			Self::MissingOption(name) => write!(f, "the {} option is required", name),
			Self::WrongOptionType(name) => write!(f, "the {} option has the wrong type", name),
			Self::EmptyTitle => write!(f, "the title can't be empty"),
			Self::TitleTooLong => write!(f, "the title is too long"),
			Self::EmptyResponse => write!(f, "the response can't be empty"),
			Self::NotAMember(user_id) => write!(f, "{} isn't a member of this server", user_id.mention()),
		}
	}
}

/// Validates the arguments of an invoked command.
pub fn parse_command(name: &str, args: &CommandArgs) -> Result<SupportCommand, CommandParseError> {
	match name {
		close::NAME => Ok(SupportCommand::Close),
		start_inquiry::NAME => start_inquiry::parse(args),
		support_response::NAME => support_response::parse(args),
		_ => Err(CommandParseError::UnknownCommand(name.to_string())),
	}
}
