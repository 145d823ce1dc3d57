use async_trait::async_trait;
use poise::serenity_prelude as serenity;

use crest_icons::{IconError, IconPayload, RoleIconEditor, RoleIconUpdate};

const MISSING_PERMISSIONS_CODE: isize = 50013;

/// Role icon edits for one guild, sent over serenity's HTTP client.
pub struct SerenityRoleEditor<'a> {
    http: &'a serenity::Http,
    guild_id: serenity::GuildId,
}

impl<'a> SerenityRoleEditor<'a> {
    pub fn new(http: &'a serenity::Http, guild_id: serenity::GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl RoleIconEditor for SerenityRoleEditor<'_> {
    async fn edit_role_icon(&self, update: RoleIconUpdate) -> Result<(), IconError> {
        let builder = match update.payload {
            IconPayload::Unicode(emoji) => serenity::EditRole::new().unicode_emoji(Some(emoji)),
            IconPayload::Image(bytes) => {
                let attachment = serenity::CreateAttachment::bytes(bytes, "icon.png");
                serenity::EditRole::new().icon(Some(&attachment))
            }
        };

        self.guild_id
            .edit_role(self.http, serenity::RoleId::new(update.role_id), builder)
            .await
            .map(|_| ())
            .map_err(icon_error_from_serenity)
    }
}

/// Only a response from Discord counts as the API refusing the edit; transport
/// failures never do.
fn icon_error_from_serenity(source: serenity::Error) -> IconError {
    match &source {
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response)) => {
            api_failure(
                response.status_code.as_u16(),
                response.error.code,
                &response.error.message,
            )
        }
        _ => IconError::Unexpected(source.to_string()),
    }
}

fn api_failure(status: u16, code: isize, message: &str) -> IconError {
    if status == 403 || code == MISSING_PERMISSIONS_CODE {
        IconError::PermissionDenied
    } else {
        IconError::RemoteApi(message.to_owned())
    }
}
