use sea_orm_migration::prelude::*;

/// Creates the `accounts` table holding linked provider identities and their OAuth tokens.
///
/// `providerAccountId` and `expiresAt` keep their camel-cased column names.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    UserId,
    Provider,
    #[sea_orm(iden = "providerAccountId")]
    ProviderAccountId,
    Type,
    RefreshToken,
    AccessToken,
    #[sea_orm(iden = "expiresAt")]
    ExpiresAt,
    TokenType,
    Scope,
    IdToken,
    SessionState,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::UserId).integer().null())
                    .col(ColumnDef::new(Accounts::Provider).text().not_null())
                    .col(ColumnDef::new(Accounts::ProviderAccountId).text().not_null())
                    .col(ColumnDef::new(Accounts::Type).text().not_null())
                    .col(ColumnDef::new(Accounts::RefreshToken).text().null())
                    .col(ColumnDef::new(Accounts::AccessToken).text().null())
                    .col(ColumnDef::new(Accounts::ExpiresAt).big_integer().null())
                    .col(ColumnDef::new(Accounts::TokenType).text().null())
                    .col(ColumnDef::new(Accounts::Scope).text().null())
                    .col(ColumnDef::new(Accounts::IdToken).text().null())
                    .col(ColumnDef::new(Accounts::SessionState).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accounts_user_id")
                            .from(Accounts::Table, Accounts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}
