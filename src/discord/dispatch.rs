// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::commands::{CommandArgs, CommandParseError, SupportCommand, parse_command};
use super::error::InquiryError;
use super::lifecycle::Lifecycle;
use super::platform::{Invocation, Platform};
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker};

/// The gateway events the inquiry system acts on
#[derive(Clone, Debug)]
pub enum InboundEvent {
	ChannelCreated {
		guild_id: Id<GuildMarker>,
		channel_id: Id<ChannelMarker>,
		category_id: Option<Id<ChannelMarker>>,
	},
	CommandInvoked {
		name: String,
		invocation: Invocation,
		args: CommandArgs,
	},
}

/// Routes inbound events to the inquiry lifecycle.
pub struct Dispatcher<P> {
	lifecycle: Lifecycle<P>,
}

impl<P: Platform> Dispatcher<P> {
	pub fn new(lifecycle: Lifecycle<P>) -> Self {
		Self { lifecycle }
	}

	pub fn lifecycle(&self) -> &Lifecycle<P> {
		&self.lifecycle
	}

	/// Handles one event. Failures are logged here and never escape to the event loop.
	pub async fn dispatch(&self, event: InboundEvent) {
		match event {
			InboundEvent::ChannelCreated {
				guild_id,
				channel_id,
				category_id,
			} => {
				if !self.lifecycle.policy().in_support_category(category_id) {
					return;
				}
				tracing::info!(channel = %channel_id, "New channel created in the inquiry category");
				if let Err(error) = self.lifecycle.auto_provision(guild_id, channel_id).await {
					tracing::error!(source = ?error, channel = %channel_id, "Failed to provision inquiry channel");
				}
			}
			InboundEvent::CommandInvoked { name, invocation, args } => {
				self.route_command(&name, &invocation, &args).await;
			}
		}
	}

	async fn route_command(&self, name: &str, invocation: &Invocation, args: &CommandArgs) {
		let command = match parse_command(name, args) {
			Ok(command) => command,
			Err(CommandParseError::UnknownCommand(name)) => {
				tracing::warn!(command = %name, "Unknown command encountered");
				return;
			}
			Err(error) => {
				let error = InquiryError::InvalidInput(error.to_string());
				self.lifecycle.report_failure(invocation, &error).await;
				return;
			}
		};

		// Failures have already been reported to the invoking member by the lifecycle.
		let result = match command {
			SupportCommand::Start { title } => self.lifecycle.start_inquiry(invocation, &title).await.map(|_| ()),
			SupportCommand::Respond { target, response } => {
				self.lifecycle.support_response(invocation, &target, &response).await
			}
			SupportCommand::Close => self.lifecycle.close_inquiry(invocation).await,
		};
		if let Err(error) = result {
			tracing::debug!(source = ?error, command = %name, "Command did not complete");
		}
	}
}
