pub use sea_orm_migration::prelude::*;

mod m20220805_000001_create_tenant_table; // keep filename + module name in sync
mod m20220805_000002_create_deployment_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220805_000001_create_tenant_table::Migration),
            Box::new(m20220805_000002_create_deployment_setting_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{Migrator, MigratorTrait};

    #[test]
    fn changesets_are_registered_in_order() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "m20220805_000001_create_tenant_table".to_string(),
                "m20220805_000002_create_deployment_setting_table".to_string(),
            ]
        );
    }
}
