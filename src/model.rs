// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, RoleMarker, UserMarker};

/// An open inquiry, keyed in the registry by the channel that hosts it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ticket {
	/// The ID of the channel hosting the inquiry.
	pub channel_id: Id<ChannelMarker>,
	/// The ID of the member who opened the inquiry with the start command.
	pub creator_id: Id<UserMarker>,
	/// The title given when the inquiry was opened.
	pub title: String,
	/// When the inquiry was registered.
	pub created_at: DateTime<Utc>,
}

impl Ticket {
	pub fn new(channel_id: Id<ChannelMarker>, creator_id: Id<UserMarker>, title: &str) -> Self {
		Self {
			channel_id,
			creator_id,
			title: title.to_string(),
			created_at: Utc::now(),
		}
	}
}

/// The member invoking a command, as reported in the interaction.
#[derive(Clone, Debug)]
pub struct Actor {
	pub id: Id<UserMarker>,
	pub display_name: String,
	/// The roles the member held when the command was invoked
	pub roles: Vec<Id<RoleMarker>>,
}

/// A member referenced as a command argument.
#[derive(Clone, Debug)]
pub struct Member {
	pub id: Id<UserMarker>,
	pub display_name: String,
}
