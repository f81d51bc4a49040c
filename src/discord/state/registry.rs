// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::Ticket;
use miette::Diagnostic;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use tokio::sync::RwLock;
use twilight_model::id::Id;
use twilight_model::id::marker::ChannelMarker;

/// Open tickets, keyed by the ID of the channel hosting each ticket.
///
/// Tickets live only in memory; the registry starts empty every time the bot starts.
#[derive(Debug, Default)]
pub struct TicketRegistry {
	tickets: RwLock<HashMap<Id<ChannelMarker>, Ticket>>,
}

#[derive(Debug, Diagnostic)]
pub enum RegistryError {
	DuplicateKey(Id<ChannelMarker>),
}

impl std::error::Error for RegistryError {}

impl fmt::Display for RegistryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicateKey(channel_id) => write!(f, "a ticket is already registered for channel {}", channel_id),
		}
	}
}

impl TicketRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn put(&self, channel_id: Id<ChannelMarker>, ticket: Ticket) -> Result<(), RegistryError> {
		let mut tickets = self.tickets.write().await;
		match tickets.entry(channel_id) {
			Entry::Occupied(_) => Err(RegistryError::DuplicateKey(channel_id)),
			Entry::Vacant(entry) => {
				entry.insert(ticket);
				Ok(())
			}
		}
	}

	pub async fn get(&self, channel_id: Id<ChannelMarker>) -> Option<Ticket> {
		self.tickets.read().await.get(&channel_id).cloned()
	}

	/// Removes the ticket for the channel, if there is one. Removing a channel with no ticket does nothing.
	pub async fn remove(&self, channel_id: Id<ChannelMarker>) -> Option<Ticket> {
		self.tickets.write().await.remove(&channel_id)
	}

	pub async fn len(&self) -> usize {
		self.tickets.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.tickets.read().await.is_empty()
	}
}
