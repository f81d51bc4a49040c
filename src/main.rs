// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;
use support_desk::config::load_config;
use support_desk::discord::{run_bot, set_up_client};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config.kdl";

#[tokio::main]
async fn main() -> miette::Result<()> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();

	let config_path = std::env::var("SUPPORT_DESK_CONFIG").unwrap_or_else(|_| String::from(DEFAULT_CONFIG_PATH));
	let config = Arc::new(load_config(&config_path).await?);
	tracing::info!(
		support_role = %config.discord.support_role,
		support_category = %config.discord.support_category,
		"Configuration loaded"
	);

	let http_client = set_up_client(&config);
	run_bot(config, http_client).await
}
