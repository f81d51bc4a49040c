// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::error::{AllowedActors, InquiryError};
use super::platform::{Invocation, Platform, Principal, ReplyVisibility};
use super::state::TicketRegistry;
use super::utils::permissions::{
	SupportPolicy, hidden_from_everyone, moderating_support_access, participant_access,
};
use super::utils::responses;
use super::utils::tickets::{
	TicketMessageData, closure_notice, inquiry_channel_name, opening_message, provisioned_channel_message,
	support_response_message,
};
use crate::model::{Member, Ticket};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker};

/// Opens, relays responses in, and closes inquiry channels.
pub struct Lifecycle<P> {
	platform: P,
	registry: Arc<TicketRegistry>,
	policy: SupportPolicy,
	close_delay: Duration,
}

impl<P: Platform> Lifecycle<P> {
	pub fn new(platform: P, registry: Arc<TicketRegistry>, policy: SupportPolicy, close_delay: Duration) -> Self {
		Self {
			platform,
			registry,
			policy,
			close_delay,
		}
	}

	pub fn policy(&self) -> &SupportPolicy {
		&self.policy
	}

	pub fn registry(&self) -> &Arc<TicketRegistry> {
		&self.registry
	}

	pub fn platform(&self) -> &P {
		&self.platform
	}

	/// Opens a new private inquiry channel for the invoking member and registers it as their ticket.
	///
	/// Failures are reported privately to the member before being returned.
	pub async fn start_inquiry(&self, invocation: &Invocation, title: &str) -> Result<Id<ChannelMarker>, InquiryError> {
		let result = self.open_ticket(invocation, title).await;
		if let Err(error) = &result {
			self.report_failure(invocation, error).await;
		}
		result
	}

	async fn open_ticket(&self, invocation: &Invocation, title: &str) -> Result<Id<ChannelMarker>, InquiryError> {
		let guild_id = invocation.guild_id;
		let actor = &invocation.actor;

		let category = self
			.platform
			.resolve_category(guild_id, self.policy.support_category)
			.await?;
		let Some(category) = category else {
			return Err(InquiryError::CategoryNotFound(self.policy.support_category));
		};

		// A missing support role only leaves the channel without staff access.
		let support_role = self.platform.resolve_role(guild_id, self.policy.support_role).await?;

		let channel_name = inquiry_channel_name(title);
		let channel_id = self.platform.create_channel(guild_id, category.id, &channel_name).await?;
		tracing::info!(channel = %channel_id, name = %channel_name, creator = %actor.id, "Created inquiry channel");

		self.platform
			.set_permissions(channel_id, Principal::Everyone(guild_id), hidden_from_everyone())
			.await?;
		match support_role {
			Some(role) => {
				self.platform
					.set_permissions(channel_id, Principal::Role(role.id), participant_access())
					.await?
			}
			None => tracing::warn!(
				source = ?InquiryError::SupportRoleNotFound(self.policy.support_role),
				channel = %channel_id,
				"Inquiry channel created without support staff access"
			),
		}
		self.platform
			.set_permissions(channel_id, Principal::Member(actor.id), participant_access())
			.await?;

		self.platform
			.send_message(channel_id, opening_message(actor.id, title)?)
			.await?;

		let ticket = Ticket::new(channel_id, actor.id, title);
		if let Err(error) = self.registry.put(channel_id, ticket).await {
			tracing::error!(source = ?error, "Inquiry channel was already registered");
			return Err(error.into());
		}

		self.platform
			.reply(
				invocation,
				TicketMessageData::text(responses::inquiry_created(channel_id)),
				ReplyVisibility::Private,
			)
			.await?;

		Ok(channel_id)
	}

	/// Sets up a channel that was created directly in the support category without the start command.
	///
	/// These channels are never registered, so only support staff can close them.
	pub async fn auto_provision(
		&self,
		guild_id: Id<GuildMarker>,
		channel_id: Id<ChannelMarker>,
	) -> Result<(), InquiryError> {
		let Some(role) = self.platform.resolve_role(guild_id, self.policy.support_role).await? else {
			return Err(InquiryError::SupportRoleNotFound(self.policy.support_role));
		};

		self.platform
			.set_permissions(channel_id, Principal::Everyone(guild_id), hidden_from_everyone())
			.await?;
		self.platform
			.set_permissions(channel_id, Principal::Role(role.id), moderating_support_access())
			.await?;
		self.platform
			.send_message(channel_id, provisioned_channel_message()?)
			.await?;

		tracing::info!(channel = %channel_id, "Provisioned channel created in the inquiry category");
		Ok(())
	}

	/// Posts a staff response to a member in the invoking inquiry channel.
	pub async fn support_response(
		&self,
		invocation: &Invocation,
		target: &Member,
		response: &str,
	) -> Result<(), InquiryError> {
		let result = self.relay_response(invocation, target, response).await;
		if let Err(error) = &result {
			self.report_failure(invocation, error).await;
		}
		result
	}

	async fn relay_response(&self, invocation: &Invocation, target: &Member, response: &str) -> Result<(), InquiryError> {
		if !self.policy.is_support(&invocation.actor) {
			return Err(InquiryError::Forbidden(AllowedActors::Support));
		}
		if !self.policy.in_support_category(invocation.channel_category) {
			return Err(InquiryError::WrongLocation);
		}

		let message = support_response_message(&invocation.actor.display_name, target, response)?;
		self.platform
			.reply(invocation, message, ReplyVisibility::Public)
			.await?;
		Ok(())
	}

	/// Closes the invoking inquiry channel: posts a notice, waits out the close delay, then deletes the channel.
	///
	/// Once the notice is posted, the channel is deleted regardless of anything else that happens in it.
	pub async fn close_inquiry(&self, invocation: &Invocation) -> Result<(), InquiryError> {
		if let Err(error) = self.announce_closure(invocation).await {
			self.report_failure(invocation, &error).await;
			return Err(error);
		}

		sleep(self.close_delay).await;

		let channel_id = invocation.channel_id;
		if self.registry.remove(channel_id).await.is_none() {
			tracing::debug!(channel = %channel_id, "Closing a channel with no registered ticket");
		}

		let reason = format!("Inquiry closed by {} ({})", invocation.actor.display_name, invocation.actor.id);
		match self.platform.delete_channel(channel_id, &reason).await {
			Ok(()) => tracing::info!(channel = %channel_id, closed_by = %invocation.actor.id, "Closed inquiry"),
			Err(error) => tracing::error!(source = ?error, channel = %channel_id, "Failed to delete inquiry channel"),
		}
		Ok(())
	}

	async fn announce_closure(&self, invocation: &Invocation) -> Result<(), InquiryError> {
		let ticket = self.registry.get(invocation.channel_id).await;
		if !self.policy.may_close(&invocation.actor, ticket.as_ref()) {
			return Err(InquiryError::Forbidden(AllowedActors::SupportOrCreator));
		}
		if !self.policy.in_support_category(invocation.channel_category) {
			return Err(InquiryError::WrongLocation);
		}

		self.platform
			.reply(invocation, closure_notice(self.close_delay)?, ReplyVisibility::Public)
			.await?;
		Ok(())
	}

	/// Tells the invoking member privately that their command failed, logging internal failures.
	pub async fn report_failure(&self, invocation: &Invocation, error: &InquiryError) {
		if error.is_internal() {
			tracing::error!(source = ?error, actor = %invocation.actor.id, "Inquiry command failed");
		} else {
			tracing::debug!(source = ?error, actor = %invocation.actor.id, "Inquiry command rejected");
		}

		let message = TicketMessageData::text(error.user_message());
		if let Err(reply_error) = self
			.platform
			.reply(invocation, message, ReplyVisibility::Private)
			.await
		{
			tracing::error!(source = ?reply_error, "Failed to report a command failure");
		}
	}
}
