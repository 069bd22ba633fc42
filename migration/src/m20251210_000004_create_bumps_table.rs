use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bumps::Table)
                    .if_not_exists()
                    .col(string(Bumps::MessageId).primary_key())
                    .col(string(Bumps::UserId))
                    .col(string(Bumps::ChannelId))
                    .col(timestamp_with_time_zone(Bumps::BumpedAt))
                    .col(string(Bumps::Source))
                    .to_owned(),
            )
            .await?;

        // Per-user bump history lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_bumps_user_id")
                    .table(Bumps::Table)
                    .col(Bumps::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_bumps_user_id")
                    .table(Bumps::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bumps::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bumps {
    Table,
    MessageId,
    UserId,
    ChannelId,
    BumpedAt,
    Source,
}
