// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::commands::CommandArgs;
use super::dispatch::InboundEvent;
use super::platform::Invocation;
use super::utils::users::display_name;
use crate::model::Actor;
use std::collections::HashMap;
use twilight_model::application::interaction::InteractionData;
use twilight_model::application::interaction::application_command::CommandData;
use twilight_model::channel::{Channel, ChannelType};
use twilight_model::gateway::event::Event;
use twilight_model::gateway::payload::incoming::InteractionCreate;

/// Picks out the gateway events the inquiry system acts on.
pub fn inbound_event(event: &Event) -> Option<InboundEvent> {
	match event {
		Event::ChannelCreate(channel_create) => channel_created(channel_create),
		Event::InteractionCreate(interaction) => match &interaction.data {
			Some(InteractionData::ApplicationCommand(command_data)) => command_invoked(interaction, command_data),
			_ => None,
		},
		_ => None,
	}
}

fn channel_created(channel: &Channel) -> Option<InboundEvent> {
	if channel.kind != ChannelType::GuildText {
		return None;
	}
	let guild_id = channel.guild_id?;
	Some(InboundEvent::ChannelCreated {
		guild_id,
		channel_id: channel.id,
		category_id: channel.parent_id,
	})
}

fn command_invoked(interaction: &InteractionCreate, command_data: &CommandData) -> Option<InboundEvent> {
	let Some(guild_id) = interaction.guild_id else {
		tracing::warn!(command = %command_data.name, "Command was used outside of a guild");
		return None;
	};
	let Some(channel) = interaction.channel.as_ref() else {
		tracing::warn!(command = %command_data.name, "Command interaction has no channel");
		return None;
	};
	let Some(member) = interaction.member.as_ref() else {
		tracing::warn!(command = %command_data.name, "Command interaction isn't from a member");
		return None;
	};
	let Some(user) = member.user.as_ref() else {
		tracing::warn!(command = %command_data.name, "Command interaction member is not a user");
		return None;
	};

	let actor = Actor {
		id: user.id,
		display_name: display_name(member.nick.as_deref(), user),
		roles: member.roles.clone(),
	};

	let mut members = HashMap::new();
	if let Some(resolved) = &command_data.resolved {
		for (user_id, member) in resolved.members.iter() {
			let Some(user) = resolved.users.get(user_id) else {
				continue;
			};
			members.insert(*user_id, display_name(member.nick.as_deref(), user));
		}
	}

	let invocation = Invocation {
		interaction_id: interaction.id,
		token: interaction.token.clone(),
		guild_id,
		channel_id: channel.id,
		channel_category: channel.parent_id,
		actor,
	};
	Some(InboundEvent::CommandInvoked {
		name: command_data.name.clone(),
		invocation,
		args: CommandArgs {
			options: command_data.options.clone(),
			members,
		},
	})
}
