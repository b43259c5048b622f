//! Debriefs and their edit delegations

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Debriefs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Debriefs::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Debriefs::Status)
                            .string_len(20)
                            .not_null()
                            .default("draft"),
                    )
                    .col(ColumnDef::new(Debriefs::WingId).string_len(64).null())
                    .col(ColumnDef::new(Debriefs::SquadronId).string_len(64).null())
                    .col(
                        ColumnDef::new(Debriefs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Debriefs::FinalizedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DebriefDelegations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DebriefDelegations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DebriefDelegations::DebriefId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DebriefDelegations::DelegatedToPilotId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DebriefDelegations::DelegatedBy)
                            .string_len(64)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DebriefDelegations::Revoked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DebriefDelegations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DebriefDelegations::RevokedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_debrief_delegations_debrief_id")
                            .from(DebriefDelegations::Table, DebriefDelegations::DebriefId)
                            .to(Debriefs::Table, Debriefs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_debrief_delegations_lookup")
                    .table(DebriefDelegations::Table)
                    .col(DebriefDelegations::DebriefId)
                    .col(DebriefDelegations::DelegatedToPilotId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DebriefDelegations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Debriefs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Debriefs {
    Table,
    Id,
    Status,
    WingId,
    SquadronId,
    CreatedAt,
    FinalizedAt,
}

#[derive(DeriveIden)]
enum DebriefDelegations {
    Table,
    Id,
    DebriefId,
    DelegatedToPilotId,
    DelegatedBy,
    Revoked,
    CreatedAt,
    RevokedAt,
}
