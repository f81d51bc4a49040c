// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use twilight_mention::fmt::Mention;
use twilight_model::id::Id;
use twilight_model::id::marker::ChannelMarker;

pub const SUPPORT_ONLY: &str = "Only support staff can use this command.";
pub const SUPPORT_OR_CREATOR_ONLY: &str = "Only support staff or the member who opened this inquiry can use this command.";
pub const SUPPORT_CATEGORY_ONLY: &str = "This command can only be used in a channel in the inquiry category.";
pub const CATEGORY_NOT_FOUND: &str = "The inquiry category couldn't be found.";
pub const OPERATION_FAILED: &str = "Something went wrong while handling that command.";

pub fn inquiry_created(channel_id: Id<ChannelMarker>) -> String {
	format!("Your inquiry channel {} has been created.", channel_id.mention())
}

pub fn invalid_input(reason: impl std::fmt::Display) -> String {
	format!("That command couldn't be used as given: {}", reason)
}
