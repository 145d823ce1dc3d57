use tracing::{info, warn};

use poise::serenity_prelude as serenity;

use crate::roles::SerenityRoleEditor;
use crate::roles::messages::{boost_advisory, failure_message, success_message};
use crest_core::{Context, Error};
use crest_icons::{IconRequest, set_role_icon};
use crest_utils::permissions::has_member_permission;

pub const USAGE: &str = "-roleicon <role> [emoji|url] (or attach an image)";

/// Set a role's icon from an attached image, an emoji or an image URL.
#[poise::command(
    prefix_command,
    slash_command,
    category = "Roles",
    aliases("seticon", "ri")
)]
pub async fn roleicon(
    ctx: Context<'_>,
    #[description = "The role to change"] role: Option<serenity::Role>,
    #[description = "Unicode emoji, custom emoji or image URL"] emoji_or_url: Option<String>,
    #[description = "Image to use as the icon"] image: Option<serenity::Attachment>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say("This command only works in servers.").await?;
        return Ok(());
    };

    let guild = guild_id.to_partial_guild(ctx.http()).await?;

    if !has_member_permission(
        ctx.http(),
        &guild,
        ctx.author().id,
        serenity::Permissions::MANAGE_ROLES,
    )
    .await?
    {
        return Ok(());
    }

    let Some(role) = role else {
        ctx.say(format!("Usage: `{USAGE}`")).await?;
        return Ok(());
    };

    if let Some(advisory) = boost_advisory(u8::from(guild.premium_tier)) {
        ctx.say(advisory).await?;
    }

    let request = IconRequest {
        role_id: role.id.get(),
        text: emoji_or_url,
        attachment_url: image.map(|attachment| attachment.url),
    };
    let editor = SerenityRoleEditor::new(ctx.http(), guild_id);

    let reply = match set_role_icon(&ctx.data().fetcher, &editor, &request).await {
        Ok(applied) => {
            info!(
                guild_id = guild_id.get(),
                role_id = role.id.get(),
                ?applied,
                "role icon updated"
            );
            success_message(role.id.get(), &applied)
        }
        Err(source) => {
            warn!(
                ?source,
                guild_id = guild_id.get(),
                role_id = role.id.get(),
                "role icon update failed"
            );
            failure_message(&source)
        }
    };

    ctx.send(
        poise::CreateReply::default()
            .content(reply)
            .allowed_mentions(serenity::CreateAllowedMentions::new()),
    )
    .await?;

    Ok(())
}
