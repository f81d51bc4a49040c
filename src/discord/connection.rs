// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::commands::command_definitions;
use super::dispatch::Dispatcher;
use super::events::inbound_event;
use super::http_platform::HttpPlatform;
use super::lifecycle::Lifecycle;
use super::state::TicketRegistry;
use super::utils::permissions::SupportPolicy;
use crate::config::ConfigData;
use miette::IntoDiagnostic;
use std::sync::Arc;
use twilight_gateway::{Config, ConfigBuilder, EventTypeFlags, Intents, Shard, ShardId, StreamExt};
use twilight_http::client::Client;
use twilight_model::gateway::event::Event;
use twilight_model::gateway::payload::outgoing::update_presence::UpdatePresencePayload;
use twilight_model::gateway::presence::{Activity, ActivityType, MinimalActivity, Status};

const PRESENCE_TEXT: &str = "inquiry tickets";

pub fn set_up_client(config: &ConfigData) -> Arc<Client> {
	Arc::new(Client::new(config.discord.bot_token.clone()))
}

pub async fn run_bot(config: Arc<ConfigData>, http_client: Arc<Client>) -> miette::Result<()> {
	let mut shard = Shard::with_config(ShardId::ONE, shard_config(config.discord.bot_token.clone())?);

	let application_id = {
		let application_response = http_client.current_user_application().await.into_diagnostic()?;
		application_response.model().await.into_diagnostic()?.id
	};

	{
		let interaction_client = http_client.interaction(application_id);
		let commands = command_definitions();
		interaction_client
			.set_global_commands(&commands)
			.await
			.into_diagnostic()?;
		tracing::info!("Commands have been registered");
	}

	let policy = SupportPolicy::new(config.discord.support_role, config.discord.support_category);
	let lifecycle = Lifecycle::new(
		HttpPlatform::new(Arc::clone(&http_client), application_id),
		Arc::new(TicketRegistry::new()),
		policy,
		config.close_delay,
	);
	let dispatcher = Arc::new(Dispatcher::new(lifecycle));

	let event_types = EventTypeFlags::READY | EventTypeFlags::CHANNEL_CREATE | EventTypeFlags::INTERACTION_CREATE;
	while let Some(event) = shard.next_event(event_types).await {
		let event = match event {
			Ok(event) => event,
			Err(error) => {
				tracing::warn!(source = ?error, "error receiving event");
				continue;
			}
		};

		tokio::spawn(handle_event(event, Arc::clone(&dispatcher)));
	}

	Ok(())
}

fn shard_config(bot_token: String) -> miette::Result<Config> {
	let intents = Intents::GUILDS;
	Ok(ConfigBuilder::new(bot_token, intents).presence(presence()?).build())
}

fn presence() -> miette::Result<UpdatePresencePayload> {
	let activity: Activity = MinimalActivity {
		kind: ActivityType::Watching,
		name: String::from(PRESENCE_TEXT),
		url: None,
	}
	.into();
	UpdatePresencePayload::new(vec![activity], false, None::<u64>, Status::Online).into_diagnostic()
}

async fn handle_event(event: Event, dispatcher: Arc<Dispatcher<HttpPlatform>>) {
	tracing::debug!("Incoming gateway message: {:?}", event);
	if let Event::Ready(ready) = &event {
		tracing::info!(user = %ready.user.name, "Discord gateway is ready");
		return;
	}
	if let Some(inbound) = inbound_event(&event) {
		dispatcher.dispatch(inbound).await;
	}
}
