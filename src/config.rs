// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlValue};
use miette::{IntoDiagnostic, bail, miette};
use std::io::ErrorKind;
use std::time::Duration;
use tokio::fs::read_to_string;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, RoleMarker};

pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_secs(5);

const TOKEN_VARIABLE: &str = "DISCORD_TOKEN";
const SUPPORT_ROLE_VARIABLE: &str = "SUPPORT_ROLE_ID";
const SUPPORT_CATEGORY_VARIABLE: &str = "SUPPORT_CATEGORY_ID";

#[derive(Debug)]
pub struct ConfigData {
	pub discord: DiscordConfig,
	/// How long a closure notice stays visible before the inquiry channel is deleted
	pub close_delay: Duration,
}

#[derive(Debug)]
pub struct DiscordConfig {
	pub bot_token: String,
	pub support_role: Id<RoleMarker>,
	pub support_category: Id<ChannelMarker>,
}

/// Loads the configuration file (if there is one) and applies environment overrides on top of it.
pub async fn load_config(config_path: &str) -> miette::Result<ConfigData> {
	let contents = match read_to_string(config_path).await {
		Ok(contents) => contents,
		Err(error) if error.kind() == ErrorKind::NotFound => {
			tracing::info!(path = config_path, "No configuration file found; using the environment only");
			String::new()
		}
		Err(error) => return Err(error).into_diagnostic(),
	};
	parse_config(&contents, |name| std::env::var(name).ok())
}

/// Parses KDL configuration contents. Values returned by `env` take precedence over the file.
pub fn parse_config(contents: &str, env: impl Fn(&str) -> Option<String>) -> miette::Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;
	let discord_document = document.get("discord").and_then(|node| node.children());

	let file_value = |name: &str| discord_document.and_then(|document| document.get_arg(name));

	let bot_token = match env(TOKEN_VARIABLE) {
		Some(token) => token,
		None => match file_value("bot_token").and_then(KdlValue::as_string) {
			Some(token) => token.to_string(),
			None => bail!("No Discord bot token configured (set discord.bot_token or {})", TOKEN_VARIABLE),
		},
	};
	if bot_token.trim().is_empty() {
		bail!("The configured Discord bot token is empty");
	}

	let support_role = match env(SUPPORT_ROLE_VARIABLE) {
		Some(value) => id_from_str(&value, "support role")?,
		None => id_from_value(file_value("support_role"), "support role")?,
	};
	let support_category = match env(SUPPORT_CATEGORY_VARIABLE) {
		Some(value) => id_from_str(&value, "support category")?,
		None => id_from_value(file_value("support_category"), "support category")?,
	};

	let close_delay = match document.get_arg("close_delay_seconds") {
		Some(value) => {
			let Some(seconds) = value.as_integer() else {
				bail!("close_delay_seconds must be an integer");
			};
			let Ok(seconds) = u64::try_from(seconds) else {
				bail!("close_delay_seconds must not be negative");
			};
			Duration::from_secs(seconds)
		}
		None => DEFAULT_CLOSE_DELAY,
	};

	Ok(ConfigData {
		discord: DiscordConfig {
			bot_token,
			support_role,
			support_category,
		},
		close_delay,
	})
}

fn id_from_value<T>(value: Option<&KdlValue>, description: &str) -> miette::Result<Id<T>> {
	let Some(value) = value else {
		bail!("No {} ID configured", description);
	};
	if let Some(number) = value.as_integer() {
		let number = u64::try_from(number).map_err(|_| miette!("The {} ID {} is out of range", description, number))?;
		return Id::new_checked(number).ok_or_else(|| miette!("The {} ID must not be zero", description));
	}
	match value.as_string() {
		Some(text) => id_from_str(text, description),
		None => bail!("The {} ID must be a number", description),
	}
}

fn id_from_str<T>(value: &str, description: &str) -> miette::Result<Id<T>> {
	let number: u64 = value
		.trim()
		.parse()
		.map_err(|_| miette!("The {} ID \"{}\" is not a number", description, value))?;
	Id::new_checked(number).ok_or_else(|| miette!("The {} ID must not be zero", description))
}
