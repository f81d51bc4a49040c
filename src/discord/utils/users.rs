// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use twilight_model::user::User;

/// Gets the name to show for a user, preferring their server nickname, then their global display name.
pub fn display_name(nick: Option<&str>, user: &User) -> String {
	nick.or(user.global_name.as_deref())
		.unwrap_or(user.name.as_str())
		.to_string()
}
