// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod common;

use common::*;
use std::collections::HashMap;
use support_desk::discord::commands::CommandArgs;
use support_desk::discord::dispatch::{Dispatcher, InboundEvent};
use support_desk::discord::error::{AllowedActors, InquiryError};
use support_desk::discord::platform::{Invocation, Principal, ReplyVisibility};
use twilight_model::application::interaction::application_command::{CommandDataOption, CommandOptionValue};
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;

fn dispatcher(platform: FakePlatform) -> Dispatcher<FakePlatform> {
	Dispatcher::new(lifecycle(platform))
}

fn channel_created(channel: u64, category: Option<u64>) -> InboundEvent {
	InboundEvent::ChannelCreated {
		guild_id: Id::new(GUILD),
		channel_id: Id::new(channel),
		category_id: category.map(Id::new),
	}
}

fn command(name: &str, invocation: Invocation, options: Vec<CommandDataOption>) -> InboundEvent {
	InboundEvent::CommandInvoked {
		name: name.to_string(),
		invocation,
		args: CommandArgs {
			options,
			..CommandArgs::default()
		},
	}
}

fn title(value: &str) -> CommandDataOption {
	CommandDataOption {
		name: String::from("title"),
		value: CommandOptionValue::String(value.to_string()),
	}
}

#[tokio::test]
async fn channels_outside_support_category_are_ignored() {
	let dispatcher = dispatcher(FakePlatform::new());

	dispatcher.dispatch(channel_created(500, Some(OTHER_CATEGORY))).await;
	dispatcher.dispatch(channel_created(501, None)).await;

	assert!(dispatcher.lifecycle().platform().calls().is_empty());
}

#[tokio::test]
async fn manual_channels_are_provisioned_but_not_registered() {
	let dispatcher = dispatcher(FakePlatform::new());
	let channel_id = Id::new(500);

	dispatcher.dispatch(channel_created(500, Some(SUPPORT_CATEGORY))).await;

	let platform = dispatcher.lifecycle().platform();
	let overwrites = platform.overwrites(channel_id);
	assert_eq!(overwrites.len(), 2);
	let (_, everyone) = overwrites
		.iter()
		.find(|(principal, _)| *principal == Principal::Everyone(Id::new(GUILD)))
		.unwrap();
	assert!(everyone.deny.contains(Permissions::VIEW_CHANNEL));
	let (_, support) = overwrites
		.iter()
		.find(|(principal, _)| *principal == Principal::Role(Id::new(SUPPORT_ROLE)))
		.unwrap();
	assert!(support.allow.contains(Permissions::VIEW_CHANNEL | Permissions::MANAGE_MESSAGES));

	let messages = platform.messages(channel_id);
	assert_eq!(messages.len(), 1);
	assert_eq!(messages[0].embeds[0].title.as_deref(), Some("📋 Inquiry ticket"));
	assert!(dispatcher.lifecycle().registry().is_empty().await);
}

#[tokio::test]
async fn provisioning_is_abandoned_without_support_role() {
	let dispatcher = dispatcher(FakePlatform::new().without_support_role());

	dispatcher.dispatch(channel_created(500, Some(SUPPORT_CATEGORY))).await;

	let lifecycle = dispatcher.lifecycle();
	assert!(lifecycle.platform().calls().is_empty());
	let result = lifecycle.auto_provision(Id::new(GUILD), Id::new(500)).await;
	assert!(matches!(result, Err(InquiryError::SupportRoleNotFound(id)) if id == Id::new(SUPPORT_ROLE)));
}

#[tokio::test(start_paused = true)]
async fn manual_channels_close_for_support_only() {
	let platform = FakePlatform::new();
	let channel_id = Id::new(500);
	platform.add_channel(channel_id);
	let dispatcher = dispatcher(platform);
	dispatcher.dispatch(channel_created(500, Some(SUPPORT_CATEGORY))).await;

	let member_close = invocation(member(MEMBER), channel_id, Some(SUPPORT_CATEGORY));
	let result = dispatcher.lifecycle().close_inquiry(&member_close).await;
	assert!(matches!(
		result,
		Err(InquiryError::Forbidden(AllowedActors::SupportOrCreator))
	));
	assert!(dispatcher.lifecycle().platform().channel_exists(channel_id));

	let staff_close = invocation(staff(STAFF), channel_id, Some(SUPPORT_CATEGORY));
	dispatcher.dispatch(command("close_inquiry", staff_close, Vec::new())).await;
	assert!(!dispatcher.lifecycle().platform().channel_exists(channel_id));
}

#[tokio::test]
async fn start_command_opens_inquiry() {
	let dispatcher = dispatcher(FakePlatform::new());
	let opener = invocation(member(MEMBER), lobby(), None);

	dispatcher
		.dispatch(command("start_inquiry", opener, vec![title("Refund request")]))
		.await;

	let platform = dispatcher.lifecycle().platform();
	let created = platform.created_channels();
	assert_eq!(created.len(), 1);
	assert_eq!(created[0].1, "inquiry-refund-request");
	let ticket = dispatcher.lifecycle().registry().get(created[0].0).await.unwrap();
	assert_eq!(ticket.creator_id, user(MEMBER));
}

#[tokio::test]
async fn invalid_arguments_are_reported_privately() {
	let dispatcher = dispatcher(FakePlatform::new());
	let opener = invocation(member(MEMBER), lobby(), None);

	dispatcher
		.dispatch(command("start_inquiry", opener, vec![title("  ")]))
		.await;

	let platform = dispatcher.lifecycle().platform();
	assert!(platform.created_channels().is_empty());
	let replies = platform.replies();
	assert_eq!(replies.len(), 1);
	assert_eq!(replies[0].1, ReplyVisibility::Private);
	let content = replies[0].0.content.clone().unwrap_or_default();
	assert!(content.starts_with("That command couldn't be used as given"));
}

fn respond(invocation: Invocation, target: u64, members: HashMap<Id<UserMarker>, String>) -> InboundEvent {
	InboundEvent::CommandInvoked {
		name: String::from("support_response"),
		invocation,
		args: CommandArgs {
			options: vec![
				CommandDataOption {
					name: String::from("member"),
					value: CommandOptionValue::User(user(target)),
				},
				CommandDataOption {
					name: String::from("response"),
					value: CommandOptionValue::String(String::from("refund processed")),
				},
			],
			members,
		},
	}
}

#[tokio::test]
async fn respond_command_relays_to_member() {
	let dispatcher = dispatcher(FakePlatform::new());
	let responder = invocation(staff(STAFF), Id::new(77), Some(SUPPORT_CATEGORY));
	let members = HashMap::from([(user(MEMBER), String::from("Lumine"))]);

	dispatcher.dispatch(respond(responder, MEMBER, members)).await;

	let (message, visibility) = dispatcher.lifecycle().platform().replies().pop().unwrap();
	assert_eq!(visibility, ReplyVisibility::Public);
	assert_eq!(message.content, Some(format!("<@{}>", MEMBER)));
	let description = message.embeds[0].description.clone().unwrap_or_default();
	assert!(description.contains("refund processed"));
}

#[tokio::test]
async fn respond_to_non_member_is_rejected_privately() {
	let dispatcher = dispatcher(FakePlatform::new());
	let responder = invocation(staff(STAFF), Id::new(77), Some(SUPPORT_CATEGORY));

	dispatcher.dispatch(respond(responder, STRANGER, HashMap::new())).await;

	let replies = dispatcher.lifecycle().platform().replies();
	assert_eq!(replies.len(), 1);
	assert_eq!(replies[0].1, ReplyVisibility::Private);
	let content = replies[0].0.content.clone().unwrap_or_default();
	assert!(content.starts_with("That command couldn't be used as given"));
	assert!(content.contains(&format!("<@{}>", STRANGER)));
}

#[tokio::test]
async fn unknown_commands_are_ignored() {
	let dispatcher = dispatcher(FakePlatform::new());
	let invoker = invocation(staff(STAFF), lobby(), None);

	dispatcher.dispatch(command("ping", invoker, Vec::new())).await;

	assert!(dispatcher.lifecycle().platform().calls().is_empty());
}
