// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use support_desk::discord::lifecycle::Lifecycle;
use support_desk::discord::platform::{
	Invocation, PermissionGrant, Platform, PlatformError, Principal, ReplyVisibility, ResolvedCategory, ResolvedRole,
};
use support_desk::discord::state::TicketRegistry;
use support_desk::discord::utils::permissions::SupportPolicy;
use support_desk::discord::utils::tickets::TicketMessageData;
use support_desk::model::{Actor, Member};
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker, RoleMarker, UserMarker};

pub const GUILD: u64 = 1;
pub const SUPPORT_ROLE: u64 = 10;
pub const SUPPORT_CATEGORY: u64 = 20;
pub const OTHER_CATEGORY: u64 = 21;
pub const MEMBER: u64 = 100;
pub const STAFF: u64 = 200;
pub const STRANGER: u64 = 300;
pub const CLOSE_DELAY: Duration = Duration::from_secs(5);

const FIRST_CREATED_CHANNEL: u64 = 1000;

#[derive(Clone, Debug)]
pub enum Call {
	CreateChannel {
		category_id: Id<ChannelMarker>,
		name: String,
		channel_id: Id<ChannelMarker>,
	},
	DeleteChannel {
		channel_id: Id<ChannelMarker>,
		reason: String,
	},
	SetPermissions {
		channel_id: Id<ChannelMarker>,
		principal: Principal,
		grant: PermissionGrant,
	},
	SendMessage {
		channel_id: Id<ChannelMarker>,
		message: TicketMessageData,
	},
	Reply {
		channel_id: Id<ChannelMarker>,
		message: TicketMessageData,
		visibility: ReplyVisibility,
	},
}

#[derive(Debug, Default)]
struct FakeState {
	calls: Vec<Call>,
	next_channel: u64,
	channels: HashSet<Id<ChannelMarker>>,
	roles: HashSet<Id<RoleMarker>>,
	categories: HashSet<Id<ChannelMarker>>,
	fail_sends: bool,
	fail_role_lookups: bool,
}

/// An in-memory Discord that records every call made to it.
#[derive(Debug, Default)]
pub struct FakePlatform {
	state: Mutex<FakeState>,
}

impl FakePlatform {
	/// A server with the support role and support category both set up
	pub fn new() -> Self {
		let platform = Self::default();
		{
			let mut state = platform.state.lock().unwrap();
			state.next_channel = FIRST_CREATED_CHANNEL;
			state.roles.insert(Id::new(SUPPORT_ROLE));
			state.categories.insert(Id::new(SUPPORT_CATEGORY));
			state.categories.insert(Id::new(OTHER_CATEGORY));
		}
		platform
	}

	pub fn without_support_role(self) -> Self {
		self.state.lock().unwrap().roles.clear();
		self
	}

	pub fn without_support_category(self) -> Self {
		self.state.lock().unwrap().categories.remove(&Id::new(SUPPORT_CATEGORY));
		self
	}

	pub fn failing_sends(self) -> Self {
		self.state.lock().unwrap().fail_sends = true;
		self
	}

	pub fn failing_role_lookups(self) -> Self {
		self.state.lock().unwrap().fail_role_lookups = true;
		self
	}

	/// Simulates a channel created by someone other than the bot.
	pub fn add_channel(&self, channel_id: Id<ChannelMarker>) {
		self.state.lock().unwrap().channels.insert(channel_id);
	}

	/// Simulates a channel deleted by someone other than the bot.
	pub fn remove_channel(&self, channel_id: Id<ChannelMarker>) {
		self.state.lock().unwrap().channels.remove(&channel_id);
	}

	pub fn channel_exists(&self, channel_id: Id<ChannelMarker>) -> bool {
		self.state.lock().unwrap().channels.contains(&channel_id)
	}

	pub fn calls(&self) -> Vec<Call> {
		self.state.lock().unwrap().calls.clone()
	}

	pub fn overwrites(&self, channel_id: Id<ChannelMarker>) -> Vec<(Principal, PermissionGrant)> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				Call::SetPermissions {
					channel_id: id,
					principal,
					grant,
				} if id == channel_id => Some((principal, grant)),
				_ => None,
			})
			.collect()
	}

	pub fn messages(&self, channel_id: Id<ChannelMarker>) -> Vec<TicketMessageData> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				Call::SendMessage { channel_id: id, message } if id == channel_id => Some(message),
				_ => None,
			})
			.collect()
	}

	pub fn replies(&self) -> Vec<(TicketMessageData, ReplyVisibility)> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				Call::Reply { message, visibility, .. } => Some((message, visibility)),
				_ => None,
			})
			.collect()
	}

	pub fn deletions(&self) -> Vec<(Id<ChannelMarker>, String)> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				Call::DeleteChannel { channel_id, reason } => Some((channel_id, reason)),
				_ => None,
			})
			.collect()
	}

	pub fn created_channels(&self) -> Vec<(Id<ChannelMarker>, String)> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				Call::CreateChannel { channel_id, name, .. } => Some((channel_id, name)),
				_ => None,
			})
			.collect()
	}

	fn record(&self, call: Call) {
		self.state.lock().unwrap().calls.push(call);
	}
}

#[async_trait]
impl Platform for FakePlatform {
	async fn create_channel(
		&self,
		_guild_id: Id<GuildMarker>,
		category_id: Id<ChannelMarker>,
		name: &str,
	) -> Result<Id<ChannelMarker>, PlatformError> {
		let mut state = self.state.lock().unwrap();
		let channel_id = Id::new(state.next_channel);
		state.next_channel += 1;
		state.channels.insert(channel_id);
		state.calls.push(Call::CreateChannel {
			category_id,
			name: name.to_string(),
			channel_id,
		});
		Ok(channel_id)
	}

	async fn delete_channel(&self, channel_id: Id<ChannelMarker>, reason: &str) -> Result<(), PlatformError> {
		let mut state = self.state.lock().unwrap();
		state.calls.push(Call::DeleteChannel {
			channel_id,
			reason: reason.to_string(),
		});
		if state.channels.remove(&channel_id) {
			Ok(())
		} else {
			Err(PlatformError::Rejected(String::from("Unknown Channel")))
		}
	}

	async fn set_permissions(
		&self,
		channel_id: Id<ChannelMarker>,
		principal: Principal,
		grant: PermissionGrant,
	) -> Result<(), PlatformError> {
		self.record(Call::SetPermissions {
			channel_id,
			principal,
			grant,
		});
		Ok(())
	}

	async fn send_message(&self, channel_id: Id<ChannelMarker>, message: TicketMessageData) -> Result<(), PlatformError> {
		if self.state.lock().unwrap().fail_sends {
			return Err(PlatformError::Rejected(String::from("Missing Access")));
		}
		self.record(Call::SendMessage { channel_id, message });
		Ok(())
	}

	async fn reply(
		&self,
		invocation: &Invocation,
		message: TicketMessageData,
		visibility: ReplyVisibility,
	) -> Result<(), PlatformError> {
		self.record(Call::Reply {
			channel_id: invocation.channel_id,
			message,
			visibility,
		});
		Ok(())
	}

	async fn resolve_role(
		&self,
		_guild_id: Id<GuildMarker>,
		role_id: Id<RoleMarker>,
	) -> Result<Option<ResolvedRole>, PlatformError> {
		let state = self.state.lock().unwrap();
		if state.fail_role_lookups {
			return Err(PlatformError::Rejected(String::from("Missing Access")));
		}
		Ok(state.roles.contains(&role_id).then_some(ResolvedRole { id: role_id }))
	}

	async fn resolve_category(
		&self,
		_guild_id: Id<GuildMarker>,
		category_id: Id<ChannelMarker>,
	) -> Result<Option<ResolvedCategory>, PlatformError> {
		let found = self.state.lock().unwrap().categories.contains(&category_id);
		Ok(found.then_some(ResolvedCategory { id: category_id }))
	}
}

pub fn lifecycle(platform: FakePlatform) -> Lifecycle<FakePlatform> {
	Lifecycle::new(
		platform,
		Arc::new(TicketRegistry::new()),
		SupportPolicy::new(Id::new(SUPPORT_ROLE), Id::new(SUPPORT_CATEGORY)),
		CLOSE_DELAY,
	)
}

pub fn member(id: u64) -> Actor {
	Actor {
		id: Id::new(id),
		display_name: format!("member{}", id),
		roles: Vec::new(),
	}
}

pub fn staff(id: u64) -> Actor {
	Actor {
		id: Id::new(id),
		display_name: format!("staff{}", id),
		roles: vec![Id::new(SUPPORT_ROLE)],
	}
}

pub fn target(id: u64) -> Member {
	Member {
		id: Id::new(id),
		display_name: format!("member{}", id),
	}
}

pub fn user(id: u64) -> Id<UserMarker> {
	Id::new(id)
}

/// A command invoked by `actor` in `channel`, which sits in `category`.
pub fn invocation(actor: Actor, channel: Id<ChannelMarker>, category: Option<u64>) -> Invocation {
	Invocation {
		interaction_id: Id::new(1),
		token: String::from("interaction-token"),
		guild_id: Id::new(GUILD),
		channel_id: channel,
		channel_category: category.map(Id::new),
		actor,
	}
}

/// Where start commands are invoked from; any channel works.
pub fn lobby() -> Id<ChannelMarker> {
	Id::new(50)
}
