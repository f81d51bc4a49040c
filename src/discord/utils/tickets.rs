// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::Member;
use std::time::Duration;
use twilight_http::request::channel::message::create_message::CreateMessage;
use twilight_mention::fmt::Mention;
use twilight_model::channel::message::AllowedMentions;
use twilight_model::channel::message::embed::Embed;
use twilight_model::http::interaction::InteractionResponseData;
use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::embed::{EmbedAuthorBuilder, EmbedBuilder, EmbedFooterBuilder};
use twilight_validate::embed::EmbedValidationError;

pub const MAX_TICKET_TITLE_LENGTH: u16 = 60;

const CHANNEL_NAME_PREFIX: &str = "inquiry";

const INFO_COLOR: u32 = 0x3498db;
const RESPONSE_COLOR: u32 = 0x2ecc71;
const CLOSE_COLOR: u32 = 0xe74c3c;

const CLOSE_INSTRUCTIONS: &str = "When the inquiry is resolved, use `/close_inquiry` to close this channel.";

/// Contains data necessary to post a ticket message
#[derive(Clone, Debug, Default)]
pub struct TicketMessageData {
	pub content: Option<String>,
	pub embeds: Vec<Embed>,
	pub allowed_mentions: AllowedMentions,
}

impl TicketMessageData {
	/// A message with only text content and no pings
	pub fn text(content: impl Into<String>) -> Self {
		Self {
			content: Some(content.into()),
			..Self::default()
		}
	}

	/// Adds all of the ticket message data to a [CreateMessage] builder
	pub fn set_create_message_data<'a>(&'a self, mut create_message: CreateMessage<'a>) -> CreateMessage<'a> {
		if let Some(content) = &self.content {
			create_message = create_message.content(content);
		}
		create_message
			.embeds(&self.embeds)
			.allowed_mentions(Some(&self.allowed_mentions))
	}
}

impl From<TicketMessageData> for InteractionResponseData {
	fn from(data: TicketMessageData) -> Self {
		let mut response = InteractionResponseDataBuilder::new();
		if let Some(content) = &data.content {
			response = response.content(content)
		}
		response
			.embeds(data.embeds)
			.allowed_mentions(data.allowed_mentions)
			.build()
	}
}

/// Derives the channel name for a new inquiry from its title. Names aren't required to be unique.
pub fn inquiry_channel_name(title: &str) -> String {
	format!("{}-{}", CHANNEL_NAME_PREFIX, title.replace(' ', "-").to_lowercase())
}

/// Generates the message introducing a newly opened inquiry in its channel
pub fn opening_message(creator: Id<UserMarker>, title: &str) -> Result<TicketMessageData, EmbedValidationError> {
	let embed = EmbedBuilder::new()
		.title(format!("📋 Inquiry: {}", title))
		.description(format!("{} opened an inquiry.\n{}", creator.mention(), CLOSE_INSTRUCTIONS))
		.color(INFO_COLOR)
		.validate()?
		.build();
	Ok(TicketMessageData {
		content: None,
		embeds: vec![embed],
		allowed_mentions: AllowedMentions::default(),
	})
}

/// Generates the instructions posted in a channel created directly in the support category
pub fn provisioned_channel_message() -> Result<TicketMessageData, EmbedValidationError> {
	let footer = EmbedFooterBuilder::new("Inquiry system").build();
	let embed = EmbedBuilder::new()
		.title("📋 Inquiry ticket")
		.description(format!(
			"This channel was created to handle an inquiry.\n{}",
			CLOSE_INSTRUCTIONS
		))
		.color(INFO_COLOR)
		.footer(footer)
		.validate()?
		.build();
	Ok(TicketMessageData {
		content: None,
		embeds: vec![embed],
		allowed_mentions: AllowedMentions::default(),
	})
}

pub fn closure_notice(delay: Duration) -> Result<TicketMessageData, EmbedValidationError> {
	let embed = EmbedBuilder::new()
		.title("🗑️ Inquiry closed")
		.description(format!(
			"This inquiry channel will be deleted in {} seconds.",
			delay.as_secs()
		))
		.color(CLOSE_COLOR)
		.validate()?
		.build();
	Ok(TicketMessageData {
		content: None,
		embeds: vec![embed],
		allowed_mentions: AllowedMentions::default(),
	})
}

/// Generates a staff response to an inquiry. Only the member being responded to is pinged.
pub fn support_response_message(
	responder_name: &str,
	target: &Member,
	response: &str,
) -> Result<TicketMessageData, EmbedValidationError> {
	let author = EmbedAuthorBuilder::new(responder_name).build();
	let footer = EmbedFooterBuilder::new(format!("Response to {}'s inquiry", target.display_name)).build();
	let embed = EmbedBuilder::new()
		.title("📌 Inquiry response")
		.description(response)
		.author(author)
		.footer(footer)
		.color(RESPONSE_COLOR)
		.validate()?
		.build();
	let mut allowed_mentions = AllowedMentions::default();
	allowed_mentions.users.push(target.id);
	Ok(TicketMessageData {
		content: Some(format!("{}", target.id.mention())),
		embeds: vec![embed],
		allowed_mentions,
	})
}
