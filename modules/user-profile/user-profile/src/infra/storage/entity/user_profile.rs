use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::email_info::Entity")]
    EmailInfo,
    #[sea_orm(has_one = "super::twitter_info::Entity")]
    TwitterInfo,
    #[sea_orm(has_one = "super::telegram_info::Entity")]
    TelegramInfo,
    #[sea_orm(has_one = "super::discord_info::Entity")]
    DiscordInfo,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::email_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmailInfo.def()
    }
}

impl Related<super::twitter_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TwitterInfo.def()
    }
}

impl Related<super::telegram_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TelegramInfo.def()
    }
}

impl Related<super::discord_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordInfo.def()
    }
}
