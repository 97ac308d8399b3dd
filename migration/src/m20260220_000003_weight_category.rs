use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260220_000002_age_category::AgeCategory;

static IDX_WEIGHT_CATEGORY_GENDER_AGE_CATEGORY: &str =
    "idx-weight_category-gender-age_category_id";
static FK_WEIGHT_CATEGORY_AGE_CATEGORY_ID: &str = "fk-weight_category-age_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeightCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(WeightCategory::Id))
                    .col(string(WeightCategory::Name))
                    .col(string_len(WeightCategory::Gender, 6))
                    .col(integer(WeightCategory::AgeCategoryId))
                    .col(double(WeightCategory::MinWeight))
                    .col(double(WeightCategory::MaxWeight))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WEIGHT_CATEGORY_AGE_CATEGORY_ID)
                            .from(WeightCategory::Table, WeightCategory::AgeCategoryId)
                            .to(AgeCategory::Table, AgeCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WEIGHT_CATEGORY_GENDER_AGE_CATEGORY)
                    .table(WeightCategory::Table)
                    .col(WeightCategory::Gender)
                    .col(WeightCategory::AgeCategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WEIGHT_CATEGORY_GENDER_AGE_CATEGORY)
                    .table(WeightCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WeightCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WeightCategory {
    Table,
    Id,
    Name,
    Gender,
    AgeCategoryId,
    MinWeight,
    MaxWeight,
}
