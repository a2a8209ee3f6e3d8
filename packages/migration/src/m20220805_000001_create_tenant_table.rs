use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Identifiers stay PascalCase; the application consuming this schema
// expects these exact table and column names.
#[derive(Iden)]
enum Tenant {
    #[iden = "Tenant"]
    Table,
    #[iden = "TenantId"]
    TenantId,
    #[iden = "TenantCode"]
    TenantCode,
    #[iden = "TenantName"]
    TenantName,
    #[iden = "AdministratorEmail"]
    AdministratorEmail,
    #[iden = "AdministratorSubject"]
    AdministratorSubject,
    #[iden = "CognitoUserPoolId"]
    CognitoUserPoolId,
    #[iden = "CognitoClientAppId"]
    CognitoClientAppId,
    #[iden = "CognitoUserPoolDomain"]
    CognitoUserPoolDomain,
    #[iden = "Timestamp"]
    Timestamp,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tenant::Table)
                    .col(
                        ColumnDef::new(Tenant::TenantId)
                            .string_len(100)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tenant::TenantCode).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Tenant::TenantName)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tenant::AdministratorEmail)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tenant::AdministratorSubject)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tenant::CognitoUserPoolId)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tenant::CognitoClientAppId)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tenant::CognitoUserPoolDomain)
                            .string_len(250)
                            .not_null(),
                    )
                    // Optimistic-concurrency token, bumped on every write.
                    .col(ColumnDef::new(Tenant::Timestamp).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Tenant_TenantCode")
                    .table(Tenant::Table)
                    .col(Tenant::TenantCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tenant::Table).to_owned())
            .await
    }
}
