use poise::serenity_prelude as serenity;

/// Resolve a member's effective guild-level permissions from their roles.
///
/// Takes an already fetched guild so callers can reuse it for other checks.
/// The guild owner always resolves to every permission.
pub async fn resolve_member_permissions(
    http: &serenity::Http,
    guild: &serenity::PartialGuild,
    user_id: serenity::UserId,
) -> anyhow::Result<serenity::Permissions> {
    if guild.owner_id == user_id {
        return Ok(serenity::Permissions::all());
    }

    let member = guild.id.member(http, user_id).await?;
    Ok(combine_role_permissions(
        guild.id,
        &member.roles,
        guild.roles.values().map(|role| (role.id, role.permissions)),
    ))
}

pub async fn has_member_permission(
    http: &serenity::Http,
    guild: &serenity::PartialGuild,
    user_id: serenity::UserId,
    required: serenity::Permissions,
) -> anyhow::Result<bool> {
    let perms = resolve_member_permissions(http, guild, user_id).await?;

    Ok(grants(perms, required))
}

/// `ADMINISTRATOR` implies everything else.
pub fn grants(perms: serenity::Permissions, required: serenity::Permissions) -> bool {
    perms.contains(serenity::Permissions::ADMINISTRATOR) || perms.contains(required)
}

fn combine_role_permissions(
    guild_id: serenity::GuildId,
    member_roles: &[serenity::RoleId],
    guild_roles: impl Iterator<Item = (serenity::RoleId, serenity::Permissions)>,
) -> serenity::Permissions {
    let everyone_role_id = serenity::RoleId::new(guild_id.get());

    guild_roles
        .filter(|(role_id, _)| *role_id == everyone_role_id || member_roles.contains(role_id))
        .fold(serenity::Permissions::empty(), |resolved, (_, permissions)| {
            resolved | permissions
        })
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::{combine_role_permissions, grants};

    #[test]
    fn administrator_grants_everything() {
        assert!(grants(
            serenity::Permissions::ADMINISTRATOR,
            serenity::Permissions::MANAGE_ROLES
        ));
    }

    #[test]
    fn required_bits_must_all_be_present() {
        let perms = serenity::Permissions::MANAGE_ROLES | serenity::Permissions::SEND_MESSAGES;
        assert!(grants(perms, serenity::Permissions::MANAGE_ROLES));
        assert!(!grants(
            serenity::Permissions::SEND_MESSAGES,
            serenity::Permissions::MANAGE_ROLES
        ));
    }

    #[test]
    fn combines_everyone_and_held_roles_only() {
        let guild_id = serenity::GuildId::new(10);
        let moderator = serenity::RoleId::new(11);
        let unrelated = serenity::RoleId::new(12);
        let roles = [
            (serenity::RoleId::new(10), serenity::Permissions::SEND_MESSAGES),
            (moderator, serenity::Permissions::MANAGE_ROLES),
            (unrelated, serenity::Permissions::BAN_MEMBERS),
        ];

        let resolved = combine_role_permissions(guild_id, &[moderator], roles.into_iter());

        assert_eq!(
            resolved,
            serenity::Permissions::SEND_MESSAGES | serenity::Permissions::MANAGE_ROLES
        );
    }
}
