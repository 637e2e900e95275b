//! Types deserialized from the Discord HTTP API.

use serde::Deserialize;

use crate::model::api::GuildDto;

/// Discord permission bit for ADMINISTRATOR.
const PERMISSION_ADMINISTRATOR: u64 = 1 << 3;
/// Discord permission bit for MANAGE_GUILD.
const PERMISSION_MANAGE_GUILD: u64 = 1 << 5;

/// The `/users/@me` OAuth response.
#[derive(Deserialize, Clone, Debug)]
pub struct OAuthUser {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
}

/// One entry of the `/users/@me/guilds` OAuth response.
#[derive(Deserialize, Clone, Debug)]
pub struct OAuthGuild {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    /// Permission bitfield, serialized by Discord as a decimal string.
    pub permissions: Option<String>,
}

impl OAuthGuild {
    /// Whether the user can administer this guild.
    ///
    /// True for the guild owner and for members holding ADMINISTRATOR or
    /// MANAGE_GUILD.
    pub fn can_manage(&self) -> bool {
        if self.owner {
            return true;
        }

        let Some(bits) = self
            .permissions
            .as_ref()
            .and_then(|p| p.parse::<u64>().ok())
        else {
            return false;
        };

        bits & (PERMISSION_ADMINISTRATOR | PERMISSION_MANAGE_GUILD) != 0
    }

    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.id,
            name: self.name,
            icon: self.icon,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn guild(owner: bool, permissions: Option<&str>) -> OAuthGuild {
        OAuthGuild {
            id: "1".to_string(),
            name: "Guild".to_string(),
            icon: None,
            owner,
            permissions: permissions.map(|p| p.to_string()),
        }
    }

    #[test]
    fn owner_always_manages() {
        assert!(guild(true, Some("0")).can_manage());
    }

    #[test]
    fn administrator_and_manage_guild_bits_qualify() {
        assert!(guild(false, Some("8")).can_manage());
        assert!(guild(false, Some("32")).can_manage());
    }

    #[test]
    fn plain_member_does_not_manage() {
        assert!(!guild(false, Some("104320577")).can_manage());
        assert!(!guild(false, None).can_manage());
    }
}
