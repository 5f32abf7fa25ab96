use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet,
    PaginatorTrait, QueryFilter, Set,
};
use time::OffsetDateTime;
use user_profile_sdk::{UserProfile, UserProfileFull};

use crate::domain::error::DomainError;
use crate::domain::provider::{IdentityBinding, IdentityKind};
use crate::domain::repo::ProfileRepository;
use crate::infra::storage::db::{db_err, insert_binding_err, insert_profile_err};
use crate::infra::storage::entity::{
    discord_info, email_info, telegram_info, twitter_info, user_profile,
};

/// ORM-based implementation of the `ProfileRepository` trait.
#[derive(Clone, Default)]
pub struct SeaOrmProfileRepository;

impl SeaOrmProfileRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    async fn find_live<C: ConnectionTrait + Send + Sync>(
        conn: &C,
        id: i64,
    ) -> Result<Option<user_profile::Model>, DomainError> {
        user_profile::Entity::find_by_id(id)
            .filter(user_profile::Column::DeletedAt.is_null())
            .one(conn)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl ProfileRepository for SeaOrmProfileRepository {
    async fn create_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        address: &str,
    ) -> Result<UserProfile, DomainError> {
        let now = OffsetDateTime::now_utc();
        let m = user_profile::ActiveModel {
            id: NotSet,
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            address: Set(address.to_owned()),
        };

        let created = m
            .insert(conn)
            .await
            .map_err(|e| insert_profile_err(&e, address))?;
        Ok(created.into())
    }

    async fn find_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<UserProfile>, DomainError> {
        Ok(Self::find_live(conn, id).await?.map(Into::into))
    }

    async fn find_profile_by_address<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        address: &str,
    ) -> Result<Option<UserProfile>, DomainError> {
        let found = user_profile::Entity::find()
            .filter(user_profile::Column::Address.eq(address))
            .filter(user_profile::Column::DeletedAt.is_null())
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn soft_delete_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<bool, DomainError> {
        let now = OffsetDateTime::now_utc();
        let result = user_profile::Entity::update_many()
            .col_expr(user_profile::Column::DeletedAt, Expr::value(now))
            .col_expr(user_profile::Column::UpdatedAt, Expr::value(now))
            .filter(user_profile::Column::Id.eq(id))
            .filter(user_profile::Column::DeletedAt.is_null())
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn identity_bound<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        binding: &IdentityBinding,
    ) -> Result<bool, DomainError> {
        let count = match binding {
            IdentityBinding::Email { email } => {
                email_info::Entity::find_by_id(email.clone())
                    .count(conn)
                    .await
            }
            IdentityBinding::Twitter(info) => {
                twitter_info::Entity::find_by_id(info.twitter_id.clone())
                    .count(conn)
                    .await
            }
            IdentityBinding::Telegram(info) => {
                telegram_info::Entity::find_by_id(info.telegram_id)
                    .count(conn)
                    .await
            }
            IdentityBinding::Discord(info) => {
                discord_info::Entity::find_by_id(info.discord_id.clone())
                    .count(conn)
                    .await
            }
        }
        .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn user_bound<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        kind: IdentityKind,
        user_id: i64,
    ) -> Result<bool, DomainError> {
        let count = match kind {
            IdentityKind::Email => {
                email_info::Entity::find()
                    .filter(email_info::Column::UserProfileId.eq(user_id))
                    .count(conn)
                    .await
            }
            IdentityKind::Twitter => {
                twitter_info::Entity::find()
                    .filter(twitter_info::Column::UserProfileId.eq(user_id))
                    .count(conn)
                    .await
            }
            IdentityKind::Telegram => {
                telegram_info::Entity::find()
                    .filter(telegram_info::Column::UserProfileId.eq(user_id))
                    .count(conn)
                    .await
            }
            IdentityKind::Discord => {
                discord_info::Entity::find()
                    .filter(discord_info::Column::UserProfileId.eq(user_id))
                    .count(conn)
                    .await
            }
        }
        .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn insert_binding<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
        binding: &IdentityBinding,
    ) -> Result<(), DomainError> {
        let kind = binding.kind();
        let result = match binding {
            IdentityBinding::Email { email } => {
                let m = email_info::ActiveModel {
                    email: Set(email.clone()),
                    user_profile_id: Set(user_id),
                };
                email_info::Entity::insert(m)
                    .exec_without_returning(conn)
                    .await
            }
            IdentityBinding::Twitter(info) => {
                let m = twitter_info::ActiveModel {
                    twitter_id: Set(info.twitter_id.clone()),
                    twitter_name: Set(info.name.clone()),
                    twitter_username: Set(info.username.clone()),
                    user_profile_id: Set(user_id),
                };
                twitter_info::Entity::insert(m)
                    .exec_without_returning(conn)
                    .await
            }
            IdentityBinding::Telegram(info) => {
                let m = telegram_info::ActiveModel {
                    telegram_id: Set(info.telegram_id),
                    telegram_first_name: Set(info.first_name.clone()),
                    telegram_last_name: Set(info.last_name.clone()),
                    telegram_username: Set(info.username.clone()),
                    telegram_photo: Set(info.photo_url.clone()),
                    user_profile_id: Set(user_id),
                };
                telegram_info::Entity::insert(m)
                    .exec_without_returning(conn)
                    .await
            }
            IdentityBinding::Discord(info) => {
                let m = discord_info::ActiveModel {
                    discord_id: Set(info.discord_id.clone()),
                    discord_name: Set(info.name.clone()),
                    discord_username: Set(info.username.clone()),
                    discord_email: Set(info.email.clone()),
                    user_profile_id: Set(user_id),
                };
                discord_info::Entity::insert(m)
                    .exec_without_returning(conn)
                    .await
            }
        };

        result.map_err(|e| insert_binding_err(&e, kind, user_id))?;
        Ok(())
    }

    async fn find_full_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<UserProfileFull>, DomainError> {
        let Some(profile) = Self::find_live(conn, id).await? else {
            return Ok(None);
        };

        let email = profile
            .find_related(email_info::Entity)
            .one(conn)
            .await
            .map_err(db_err)?;
        let twitter = profile
            .find_related(twitter_info::Entity)
            .one(conn)
            .await
            .map_err(db_err)?;
        let telegram = profile
            .find_related(telegram_info::Entity)
            .one(conn)
            .await
            .map_err(db_err)?;
        let discord = profile
            .find_related(discord_info::Entity)
            .one(conn)
            .await
            .map_err(db_err)?;

        Ok(Some(UserProfileFull {
            profile: profile.into(),
            email: email.map(Into::into).unwrap_or_default(),
            twitter: twitter.map(Into::into).unwrap_or_default(),
            telegram: telegram.map(Into::into).unwrap_or_default(),
            discord: discord.map(Into::into).unwrap_or_default(),
        }))
    }
}
