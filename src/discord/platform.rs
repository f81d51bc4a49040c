// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::tickets::TicketMessageData;
use crate::model::Actor;
use async_trait::async_trait;
use miette::Diagnostic;
use std::fmt;
use twilight_http::error::Error;
use twilight_http::response::DeserializeBodyError;
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker, InteractionMarker, RoleMarker, UserMarker};

/// Everything the inquiry lifecycle needs from Discord.
#[async_trait]
pub trait Platform: Send + Sync {
	async fn create_channel(
		&self,
		guild_id: Id<GuildMarker>,
		category_id: Id<ChannelMarker>,
		name: &str,
	) -> Result<Id<ChannelMarker>, PlatformError>;

	async fn delete_channel(&self, channel_id: Id<ChannelMarker>, reason: &str) -> Result<(), PlatformError>;

	async fn set_permissions(
		&self,
		channel_id: Id<ChannelMarker>,
		principal: Principal,
		grant: PermissionGrant,
	) -> Result<(), PlatformError>;

	async fn send_message(&self, channel_id: Id<ChannelMarker>, message: TicketMessageData) -> Result<(), PlatformError>;

	/// Responds to the interaction that invoked a command.
	async fn reply(
		&self,
		invocation: &Invocation,
		message: TicketMessageData,
		visibility: ReplyVisibility,
	) -> Result<(), PlatformError>;

	async fn resolve_role(
		&self,
		guild_id: Id<GuildMarker>,
		role_id: Id<RoleMarker>,
	) -> Result<Option<ResolvedRole>, PlatformError>;

	async fn resolve_category(
		&self,
		guild_id: Id<GuildMarker>,
		category_id: Id<ChannelMarker>,
	) -> Result<Option<ResolvedCategory>, PlatformError>;
}

/// Who a permission overwrite applies to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Principal {
	/// The guild's default role, which every member has
	Everyone(Id<GuildMarker>),
	Role(Id<RoleMarker>),
	Member(Id<UserMarker>),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PermissionGrant {
	pub allow: Permissions,
	pub deny: Permissions,
}

impl PermissionGrant {
	pub fn allow(allow: Permissions) -> Self {
		Self {
			allow,
			deny: Permissions::empty(),
		}
	}

	pub fn deny(deny: Permissions) -> Self {
		Self {
			allow: Permissions::empty(),
			deny,
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReplyVisibility {
	/// Only the invoking member sees the reply
	Private,
	Public,
}

/// A command invocation waiting on a response, along with where it was invoked and by whom.
#[derive(Clone, Debug)]
pub struct Invocation {
	pub interaction_id: Id<InteractionMarker>,
	pub token: String,
	pub guild_id: Id<GuildMarker>,
	pub channel_id: Id<ChannelMarker>,
	/// The category the invoking channel belongs to, if any
	pub channel_category: Option<Id<ChannelMarker>>,
	pub actor: Actor,
}

/// A role that exists in the guild
#[derive(Clone, Debug)]
pub struct ResolvedRole {
	pub id: Id<RoleMarker>,
}

/// A category channel that exists in the guild
#[derive(Clone, Debug)]
pub struct ResolvedCategory {
	pub id: Id<ChannelMarker>,
}

/// Error data for a failed call to Discord
#[derive(Debug, Diagnostic)]
pub enum PlatformError {
	Http(Error),
	Deserialize(DeserializeBodyError),
	/// Discord accepted the request but the result wasn't usable
	Rejected(String),
}

impl From<Error> for PlatformError {
	fn from(error: Error) -> Self {
		Self::Http(error)
	}
}

impl From<DeserializeBodyError> for PlatformError {
	fn from(error: DeserializeBodyError) -> Self {
		Self::Deserialize(error)
	}
}

impl std::error::Error for PlatformError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Http(error) => Some(error),
			Self::Deserialize(error) => Some(error),
			Self::Rejected(_) => None,
		}
	}
}

impl fmt::Display for PlatformError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Http(error) => write!(f, "HTTP error: {}", error),
			Self::Deserialize(error) => write!(f, "deserialization error: {}", error),
			Self::Rejected(reason) => write!(f, "rejected by Discord: {}", reason),
		}
	}
}
