use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户资料表：角色、子角色与审批状态
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Profiles::FullName).string().not_null())
                    .col(ColumnDef::new(Profiles::Role).string().not_null())
                    .col(ColumnDef::new(Profiles::SubRole).string().null())
                    .col(
                        ColumnDef::new(Profiles::ApprovalStatus)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Profiles::House).string().null())
                    .col(
                        ColumnDef::new(Profiles::Duties)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(Profiles::Phone).string().null())
                    .col(ColumnDef::new(Profiles::ClassName).string().null())
                    .col(ColumnDef::new(Profiles::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Profiles::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Profiles::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 联系表单
        manager
            .create_table(
                Table::create()
                    .table(ContactInquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactInquiries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactInquiries::Name).string().not_null())
                    .col(ColumnDef::new(ContactInquiries::Email).string().not_null())
                    .col(ColumnDef::new(ContactInquiries::Phone).string().null())
                    .col(ColumnDef::new(ContactInquiries::Message).text().not_null())
                    .col(
                        ColumnDef::new(ContactInquiries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_profiles_role")
                    .table(Profiles::Table)
                    .col(Profiles::Role)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_profiles_approval_status")
                    .table(Profiles::Table)
                    .col(Profiles::ApprovalStatus)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactInquiries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Profiles {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
    Email,
    PasswordHash,
    FullName,
    Role,
    SubRole,
    ApprovalStatus,
    House,
    Duties,
    Phone,
    ClassName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContactInquiries {
    #[sea_orm(iden = "contact_inquiries")]
    Table,
    Id,
    Name,
    Email,
    Phone,
    Message,
    CreatedAt,
}
