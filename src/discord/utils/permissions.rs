// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::platform::PermissionGrant;
use crate::model::{Actor, Ticket};
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, RoleMarker};

/// Permissions needed to take part in an inquiry channel.
pub fn inquiry_participant_permissions() -> Permissions {
	Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::READ_MESSAGE_HISTORY
}

/// The overwrite hiding an inquiry channel from everyone not explicitly let in.
pub fn hidden_from_everyone() -> PermissionGrant {
	PermissionGrant::deny(Permissions::VIEW_CHANNEL)
}

pub fn participant_access() -> PermissionGrant {
	PermissionGrant::allow(inquiry_participant_permissions())
}

/// Support access for channels created directly in the support category, where staff also moderate messages.
pub fn moderating_support_access() -> PermissionGrant {
	PermissionGrant::allow(inquiry_participant_permissions() | Permissions::MANAGE_MESSAGES)
}

/// Authorization rules for inquiry commands, given the configured support role and category.
#[derive(Clone, Copy, Debug)]
pub struct SupportPolicy {
	pub support_role: Id<RoleMarker>,
	pub support_category: Id<ChannelMarker>,
}

impl SupportPolicy {
	pub fn new(support_role: Id<RoleMarker>, support_category: Id<ChannelMarker>) -> Self {
		Self {
			support_role,
			support_category,
		}
	}

	pub fn is_support(&self, actor: &Actor) -> bool {
		actor.roles.contains(&self.support_role)
	}

	pub fn in_support_category(&self, channel_category: Option<Id<ChannelMarker>>) -> bool {
		channel_category == Some(self.support_category)
	}

	/// Support staff may close any inquiry; anyone else only an inquiry they opened themselves.
	pub fn may_close(&self, actor: &Actor, ticket: Option<&Ticket>) -> bool {
		self.is_support(actor) || ticket.is_some_and(|ticket| ticket.creator_id == actor.id)
	}
}
