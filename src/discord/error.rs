// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::platform::PlatformError;
use super::state::RegistryError;
use super::utils::responses;
use miette::Diagnostic;
use std::fmt;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, RoleMarker};
use twilight_validate::embed::EmbedValidationError;

/// Who an operation is restricted to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllowedActors {
	Support,
	SupportOrCreator,
}

/// Ways an inquiry operation can fail
#[derive(Debug, Diagnostic)]
pub enum InquiryError {
	/// The configured support role doesn't exist on the server
	SupportRoleNotFound(Id<RoleMarker>),
	/// The configured support category doesn't exist on the server
	CategoryNotFound(Id<ChannelMarker>),
	Forbidden(AllowedActors),
	/// The command was used outside the support category
	WrongLocation,
	InvalidInput(String),
	DuplicateTicket(RegistryError),
	Embed(EmbedValidationError),
	Platform(PlatformError),
}

impl InquiryError {
	/// Gets the private message explaining this failure to the member who invoked the command.
	pub fn user_message(&self) -> String {
		match self {
			Self::CategoryNotFound(_) => String::from(responses::CATEGORY_NOT_FOUND),
			Self::Forbidden(AllowedActors::Support) => String::from(responses::SUPPORT_ONLY),
			Self::Forbidden(AllowedActors::SupportOrCreator) => String::from(responses::SUPPORT_OR_CREATOR_ONLY),
			Self::WrongLocation => String::from(responses::SUPPORT_CATEGORY_ONLY),
			Self::InvalidInput(reason) => responses::invalid_input(reason),
			Self::SupportRoleNotFound(_) | Self::DuplicateTicket(_) | Self::Embed(_) | Self::Platform(_) => {
				String::from(responses::OPERATION_FAILED)
			}
		}
	}

	/// Whether the failure is on our end (or Discord's) rather than a rejected request from a member
	pub fn is_internal(&self) -> bool {
		matches!(
			self,
			Self::SupportRoleNotFound(_) | Self::CategoryNotFound(_) | Self::DuplicateTicket(_) | Self::Embed(_) | Self::Platform(_)
		)
	}
}

impl From<PlatformError> for InquiryError {
	fn from(error: PlatformError) -> Self {
		Self::Platform(error)
	}
}

impl From<RegistryError> for InquiryError {
	fn from(error: RegistryError) -> Self {
		Self::DuplicateTicket(error)
	}
}

impl From<EmbedValidationError> for InquiryError {
	fn from(error: EmbedValidationError) -> Self {
		Self::Embed(error)
	}
}

impl std::error::Error for InquiryError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::DuplicateTicket(error) => Some(error),
			Self::Embed(error) => Some(error),
			Self::Platform(error) => Some(error),
			_ => None,
		}
	}
}

impl fmt::Display for InquiryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::SupportRoleNotFound(role_id) => write!(f, "support role {} was not found", role_id),
			Self::CategoryNotFound(category_id) => write!(f, "support category {} was not found", category_id),
			Self::Forbidden(AllowedActors::Support) => write!(f, "actor is not support staff"),
			Self::Forbidden(AllowedActors::SupportOrCreator) => {
				write!(f, "actor is neither support staff nor the inquiry creator")
			}
			Self::WrongLocation => write!(f, "command used outside the support category"),
			Self::InvalidInput(reason) => write!(f, "invalid command input: {}", reason),
			Self::DuplicateTicket(error) => write!(f, "ticket registration failed: {}", error),
			Self::Embed(error) => write!(f, "invalid embed: {}", error),
			Self::Platform(error) => write!(f, "Discord request failed: {}", error),
		}
	}
}
