//! Welcome message configuration parameters.

use crate::model::api::{UpdateWelcomeDto, WelcomeConfigDto};

/// Parameters for a partial welcome config update.
///
/// Fields left as `None` keep their stored value. For the nullable columns
/// (`channel_id`, `footer`, `image`) an empty string clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateWelcomeParams {
    pub enabled: Option<bool>,
    pub channel_id: Option<Option<String>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub footer: Option<Option<String>>,
    pub show_avatar: Option<bool>,
    pub image: Option<Option<String>>,
}

impl From<UpdateWelcomeDto> for UpdateWelcomeParams {
    fn from(dto: UpdateWelcomeDto) -> Self {
        Self {
            enabled: dto.enabled,
            channel_id: dto.channel_id.map(clear_if_empty),
            title: dto.title,
            description: dto.description,
            color: dto.color,
            footer: dto.footer.map(clear_if_empty),
            show_avatar: dto.show_avatar,
            image: dto.image.map(clear_if_empty),
        }
    }
}

fn clear_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Converts a welcome config entity into its dashboard DTO.
impl From<entity::welcome_config::Model> for WelcomeConfigDto {
    fn from(entity: entity::welcome_config::Model) -> Self {
        Self {
            enabled: entity.enabled,
            channel_id: entity.channel_id,
            title: entity.title,
            description: entity.description,
            color: entity.color,
            footer: entity.footer,
            show_avatar: entity.show_avatar,
            image: entity.image,
        }
    }
}
