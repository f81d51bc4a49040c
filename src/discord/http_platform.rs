// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::platform::{
	Invocation, PermissionGrant, Platform, PlatformError, Principal, ReplyVisibility, ResolvedCategory, ResolvedRole,
};
use super::utils::tickets::TicketMessageData;
use async_trait::async_trait;
use std::sync::Arc;
use twilight_http::client::Client;
use twilight_http::error::ErrorType;
use twilight_http::request::AuditLogReason;
use twilight_http::response::StatusCode;
use twilight_model::channel::ChannelType;
use twilight_model::channel::message::MessageFlags;
use twilight_model::http::interaction::{InteractionResponse, InteractionResponseData, InteractionResponseType};
use twilight_model::http::permission_overwrite::{PermissionOverwrite, PermissionOverwriteType};
use twilight_model::id::Id;
use twilight_model::id::marker::{ApplicationMarker, ChannelMarker, GuildMarker, RoleMarker};

/// Talks to Discord over its HTTP API.
pub struct HttpPlatform {
	http_client: Arc<Client>,
	application_id: Id<ApplicationMarker>,
}

impl HttpPlatform {
	pub fn new(http_client: Arc<Client>, application_id: Id<ApplicationMarker>) -> Self {
		Self {
			http_client,
			application_id,
		}
	}
}

#[async_trait]
impl Platform for HttpPlatform {
	async fn create_channel(
		&self,
		guild_id: Id<GuildMarker>,
		category_id: Id<ChannelMarker>,
		name: &str,
	) -> Result<Id<ChannelMarker>, PlatformError> {
		let channel = self
			.http_client
			.create_guild_channel(guild_id, name)
			.kind(ChannelType::GuildText)
			.parent_id(category_id)
			.await?
			.model()
			.await?;
		Ok(channel.id)
	}

	async fn delete_channel(&self, channel_id: Id<ChannelMarker>, reason: &str) -> Result<(), PlatformError> {
		self.http_client.delete_channel(channel_id).reason(reason).await?;
		Ok(())
	}

	async fn set_permissions(
		&self,
		channel_id: Id<ChannelMarker>,
		principal: Principal,
		grant: PermissionGrant,
	) -> Result<(), PlatformError> {
		let (id, kind) = match principal {
			Principal::Everyone(guild_id) => (guild_id.cast(), PermissionOverwriteType::Role),
			Principal::Role(role_id) => (role_id.cast(), PermissionOverwriteType::Role),
			Principal::Member(user_id) => (user_id.cast(), PermissionOverwriteType::Member),
		};
		let overwrite = PermissionOverwrite {
			allow: Some(grant.allow),
			deny: Some(grant.deny),
			id,
			kind,
		};
		self.http_client
			.update_channel_permission(channel_id, &overwrite)
			.await?;
		Ok(())
	}

	async fn send_message(&self, channel_id: Id<ChannelMarker>, message: TicketMessageData) -> Result<(), PlatformError> {
		message
			.set_create_message_data(self.http_client.create_message(channel_id))
			.await?;
		Ok(())
	}

	async fn reply(
		&self,
		invocation: &Invocation,
		message: TicketMessageData,
		visibility: ReplyVisibility,
	) -> Result<(), PlatformError> {
		let mut response = InteractionResponseData::from(message);
		if visibility == ReplyVisibility::Private {
			response.flags = Some(MessageFlags::EPHEMERAL);
		}
		let response = InteractionResponse {
			kind: InteractionResponseType::ChannelMessageWithSource,
			data: Some(response),
		};
		self.http_client
			.interaction(self.application_id)
			.create_response(invocation.interaction_id, &invocation.token, &response)
			.await?;
		Ok(())
	}

	async fn resolve_role(
		&self,
		guild_id: Id<GuildMarker>,
		role_id: Id<RoleMarker>,
	) -> Result<Option<ResolvedRole>, PlatformError> {
		let roles = self.http_client.roles(guild_id).await?.models().await?;
		let role = roles.into_iter().find(|role| role.id == role_id).map(|role| ResolvedRole { id: role.id });
		Ok(role)
	}

	async fn resolve_category(
		&self,
		guild_id: Id<GuildMarker>,
		category_id: Id<ChannelMarker>,
	) -> Result<Option<ResolvedCategory>, PlatformError> {
		let channel = match self.http_client.channel(category_id).await {
			Ok(response) => response.model().await?,
			Err(error) => {
				if let ErrorType::Response { status, .. } = error.kind() {
					if *status == StatusCode::NOT_FOUND {
						return Ok(None);
					}
				}
				return Err(error.into());
			}
		};

		if channel.kind != ChannelType::GuildCategory || channel.guild_id != Some(guild_id) {
			return Ok(None);
		}
		Ok(Some(ResolvedCategory { id: channel.id }))
	}
}
