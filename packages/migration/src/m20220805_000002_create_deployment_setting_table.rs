use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum DeploymentSetting {
    #[iden = "DeploymentSetting"]
    Table,
    #[iden = "Id"]
    Id,
    #[iden = "SettingType"]
    SettingType,
    #[iden = "SettingValue"]
    SettingValue,
    #[iden = "Timestamp"]
    Timestamp,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeploymentSetting::Table)
                    .col(
                        ColumnDef::new(DeploymentSetting::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DeploymentSetting::SettingType)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeploymentSetting::SettingValue)
                            .string_len(1000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeploymentSetting::Timestamp)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeploymentSetting::Table).to_owned())
            .await
    }
}
