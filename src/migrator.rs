use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_medications_table::Migration),
            Box::new(m20250301_000002_create_sales_table::Migration),
            Box::new(m20250301_000003_create_sale_items_table::Migration),
            Box::new(m20250301_000004_create_purchases_table::Migration),
        ]
    }
}

// Migration implementations

mod m20250301_000001_create_medications_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_medications_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Create medications table aligned with entities::medication Model
            manager
                .create_table(
                    Table::create()
                        .table(Medications::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Medications::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Medications::BranchId).string().not_null())
                        .col(ColumnDef::new(Medications::Name).string().not_null())
                        .col(ColumnDef::new(Medications::Strength).string().null())
                        .col(ColumnDef::new(Medications::StockQuantity).integer().null())
                        .col(ColumnDef::new(Medications::ReorderLevel).integer().null())
                        .col(ColumnDef::new(Medications::Price).decimal().null())
                        .col(ColumnDef::new(Medications::BatchNumber).string().null())
                        .col(ColumnDef::new(Medications::ExpiryDate).date().null())
                        .col(ColumnDef::new(Medications::Description).text().null())
                        .col(ColumnDef::new(Medications::StockStatus).string().null())
                        .col(
                            ColumnDef::new(Medications::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Medications::UpdatedAt).timestamp().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_medications_branch_id")
                        .table(Medications::Table)
                        .col(Medications::BranchId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_medications_expiry_date")
                        .table(Medications::Table)
                        .col(Medications::ExpiryDate)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Medications::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Medications {
        Table,
        Id,
        BranchId,
        Name,
        Strength,
        StockQuantity,
        ReorderLevel,
        Price,
        BatchNumber,
        ExpiryDate,
        Description,
        StockStatus,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250301_000002_create_sales_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_sales_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Sales::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Sales::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Sales::BranchId).string().not_null())
                        .col(ColumnDef::new(Sales::TotalAmount).decimal().null())
                        .col(ColumnDef::new(Sales::TaxAmount).decimal().null())
                        .col(ColumnDef::new(Sales::Discount).decimal().null())
                        .col(ColumnDef::new(Sales::PaymentMethod).string().null())
                        .col(ColumnDef::new(Sales::SaleDate).timestamp().not_null())
                        .col(ColumnDef::new(Sales::CustomerName).string().null())
                        .col(ColumnDef::new(Sales::CustomerPhone).string().null())
                        .to_owned(),
                )
                .await?;

            // The monthly trend filters on sale_date ranges
            manager
                .create_index(
                    Index::create()
                        .name("idx_sales_sale_date")
                        .table(Sales::Table)
                        .col(Sales::SaleDate)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Sales::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Sales {
        Table,
        Id,
        BranchId,
        TotalAmount,
        TaxAmount,
        Discount,
        PaymentMethod,
        SaleDate,
        CustomerName,
        CustomerPhone,
    }
}

mod m20250301_000003_create_sale_items_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000003_create_sale_items_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SaleItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SaleItems::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(SaleItems::SaleId).big_integer().not_null())
                        .col(
                            ColumnDef::new(SaleItems::MedicationId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SaleItems::Quantity).integer().not_null())
                        .col(ColumnDef::new(SaleItems::UnitPrice).decimal().not_null())
                        .col(ColumnDef::new(SaleItems::SubTotal).decimal().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_sale_items_sale_id")
                                .from(SaleItems::Table, SaleItems::SaleId)
                                .to(
                                    super::m20250301_000002_create_sales_table::Sales::Table,
                                    super::m20250301_000002_create_sales_table::Sales::Id,
                                )
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_sale_items_medication_id")
                                .from(SaleItems::Table, SaleItems::MedicationId)
                                .to(
                                    super::m20250301_000001_create_medications_table::Medications::Table,
                                    super::m20250301_000001_create_medications_table::Medications::Id,
                                )
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // The top-selling ranking groups line items by medication
            manager
                .create_index(
                    Index::create()
                        .name("idx_sale_items_medication_id")
                        .table(SaleItems::Table)
                        .col(SaleItems::MedicationId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SaleItems::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum SaleItems {
        Table,
        Id,
        SaleId,
        MedicationId,
        Quantity,
        UnitPrice,
        SubTotal,
    }
}

mod m20250301_000004_create_purchases_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000004_create_purchases_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Purchases::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Purchases::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Purchases::BranchId).string().not_null())
                        .col(
                            ColumnDef::new(Purchases::PurchaseDate)
                                .timestamp()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Purchases::TotalAmount).decimal().null())
                        .col(ColumnDef::new(Purchases::InvoiceNumber).string().null())
                        .col(ColumnDef::new(Purchases::Notes).text().null())
                        .col(ColumnDef::new(Purchases::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Purchases::UpdatedAt).timestamp().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_purchases_purchase_date")
                        .table(Purchases::Table)
                        .col(Purchases::PurchaseDate)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Purchases::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Purchases {
        Table,
        Id,
        BranchId,
        PurchaseDate,
        TotalAmount,
        InvoiceNumber,
        Notes,
        CreatedAt,
        UpdatedAt,
    }
}
