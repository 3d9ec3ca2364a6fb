use sea_orm_migration::prelude::*;

/// Creates the `verification_tokens` table keyed on `(identifier, token)`.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum VerificationTokens {
    Table,
    Identifier,
    Token,
    Expires,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerificationTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VerificationTokens::Identifier)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VerificationTokens::Token).text().not_null())
                    .col(
                        ColumnDef::new(VerificationTokens::Expires)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(VerificationTokens::Identifier)
                            .col(VerificationTokens::Token),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("verification_token_id_token")
                    .table(VerificationTokens::Table)
                    .col(VerificationTokens::Identifier)
                    .col(VerificationTokens::Token)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VerificationTokens::Table).to_owned())
            .await
    }
}
