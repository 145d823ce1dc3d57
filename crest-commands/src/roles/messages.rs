use crest_icons::tier::lacks_role_icon_tier;
use crest_icons::{AppliedIcon, IconError};

/// Soft warning for servers below the role icon boost tier. Never blocks the edit.
pub fn boost_advisory(premium_tier: u8) -> Option<&'static str> {
    lacks_role_icon_tier(premium_tier).then_some(
        "**Warning:** This server is not Level 2 boosted. Role icons might not update.",
    )
}

pub fn success_message(role_id: u64, applied: &AppliedIcon) -> String {
    match applied {
        AppliedIcon::Unicode(emoji) => {
            format!("**Success!** Set <@&{role_id}> icon to: {emoji}")
        }
        AppliedIcon::Image { .. } => format!("**Success!** Role icon updated for <@&{role_id}>."),
    }
}

pub fn failure_message(error: &IconError) -> String {
    match error {
        IconError::MissingInput => {
            "Please provide a role and either an image, emoji, or URL.".to_owned()
        }
        IconError::FetchFailed { .. } => "Could not download the image. Check the URL.".to_owned(),
        IconError::PermissionDenied => "**Permission Error:** I cannot edit this role (it might be above me) or the server lacks Level 2 boosts.".to_owned(),
        IconError::RemoteApi(message) => format!("**API Error:** {message}"),
        IconError::Unexpected(message) => format!("**Error:** {message}"),
    }
}
