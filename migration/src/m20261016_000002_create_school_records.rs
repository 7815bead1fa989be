use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn text_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).string().not_null().to_owned()
}

fn opt_text_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).string().null().to_owned()
}

fn long_text_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).text().not_null().to_owned()
}

fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).big_integer().not_null().to_owned()
}

fn owner_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).big_integer().not_null().to_owned()
}

/// 指向 profiles.id 的外键
fn profile_fk<T: IntoIden, C: IntoIden>(table: T, col: C) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .from(table, col)
        .to(Profiles::Table, Profiles::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(id_col(Classes::Id))
                    .col(text_col(Classes::Name))
                    .col(opt_text_col(Classes::Section))
                    .col(ColumnDef::new(Classes::ClassTeacherId).big_integer().null())
                    .col(opt_text_col(Classes::Room))
                    .col(timestamp_col(Classes::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::ClassTeacherId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(id_col(Subjects::Id))
                    .col(text_col(Subjects::Name))
                    .col(text_col(Subjects::Code))
                    .col(opt_text_col(Subjects::Department))
                    .col(timestamp_col(Subjects::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(id_col(Exams::Id))
                    .col(text_col(Exams::Title))
                    .col(text_col(Exams::Subject))
                    .col(text_col(Exams::ClassName))
                    .col(text_col(Exams::ExamType))
                    .col(text_col(Exams::StartDate))
                    .col(text_col(Exams::EndDate))
                    .col(ColumnDef::new(Exams::MaxMarks).integer().not_null())
                    .col(owner_col(Exams::CreatedBy))
                    .col(timestamp_col(Exams::CreatedAt))
                    .foreign_key(&mut profile_fk(Exams::Table, Exams::CreatedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(id_col(Assignments::Id))
                    .col(text_col(Assignments::Title))
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(text_col(Assignments::Subject))
                    .col(text_col(Assignments::ClassName))
                    .col(text_col(Assignments::DueDate))
                    .col(owner_col(Assignments::CreatedBy))
                    .col(timestamp_col(Assignments::CreatedAt))
                    .foreign_key(&mut profile_fk(Assignments::Table, Assignments::CreatedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(id_col(Events::Id))
                    .col(text_col(Events::Title))
                    .col(ColumnDef::new(Events::Description).text().null())
                    .col(opt_text_col(Events::Venue))
                    .col(text_col(Events::EventDate))
                    .col(timestamp_col(Events::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(id_col(Announcements::Id))
                    .col(text_col(Announcements::Title))
                    .col(long_text_col(Announcements::Content))
                    .col(text_col(Announcements::Audience))
                    .col(timestamp_col(Announcements::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(id_col(Courses::Id))
                    .col(text_col(Courses::Name))
                    .col(text_col(Courses::Code))
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(timestamp_col(Courses::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(id_col(Departments::Id))
                    .col(text_col(Departments::Name))
                    .col(opt_text_col(Departments::HeadName))
                    .col(ColumnDef::new(Departments::Description).text().null())
                    .col(timestamp_col(Departments::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TransportRoutes::Table)
                    .if_not_exists()
                    .col(id_col(TransportRoutes::Id))
                    .col(text_col(TransportRoutes::RouteName))
                    .col(text_col(TransportRoutes::VehicleNumber))
                    .col(opt_text_col(TransportRoutes::DriverName))
                    .col(long_text_col(TransportRoutes::Stops))
                    .col(timestamp_col(TransportRoutes::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LeaveApplications::Table)
                    .if_not_exists()
                    .col(id_col(LeaveApplications::Id))
                    .col(owner_col(LeaveApplications::ApplicantId))
                    .col(text_col(LeaveApplications::LeaveType))
                    .col(long_text_col(LeaveApplications::Reason))
                    .col(text_col(LeaveApplications::StartDate))
                    .col(text_col(LeaveApplications::EndDate))
                    .col(text_col(LeaveApplications::Status))
                    .col(timestamp_col(LeaveApplications::CreatedAt))
                    .foreign_key(&mut profile_fk(
                        LeaveApplications::Table,
                        LeaveApplications::ApplicantId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupportTickets::Table)
                    .if_not_exists()
                    .col(id_col(SupportTickets::Id))
                    .col(owner_col(SupportTickets::RequesterId))
                    .col(text_col(SupportTickets::Subject))
                    .col(long_text_col(SupportTickets::Description))
                    .col(text_col(SupportTickets::Status))
                    .col(text_col(SupportTickets::Priority))
                    .col(timestamp_col(SupportTickets::CreatedAt))
                    .foreign_key(&mut profile_fk(
                        SupportTickets::Table,
                        SupportTickets::RequesterId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LibraryBooks::Table)
                    .if_not_exists()
                    .col(id_col(LibraryBooks::Id))
                    .col(text_col(LibraryBooks::Title))
                    .col(text_col(LibraryBooks::Author))
                    .col(opt_text_col(LibraryBooks::Isbn))
                    .col(opt_text_col(LibraryBooks::Category))
                    .col(
                        ColumnDef::new(LibraryBooks::AvailableCopies)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(timestamp_col(LibraryBooks::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FeeRecords::Table)
                    .if_not_exists()
                    .col(id_col(FeeRecords::Id))
                    .col(owner_col(FeeRecords::StudentId))
                    .col(text_col(FeeRecords::FeeType))
                    .col(ColumnDef::new(FeeRecords::Amount).double().not_null())
                    .col(text_col(FeeRecords::Status))
                    .col(text_col(FeeRecords::DueDate))
                    .col(timestamp_col(FeeRecords::CreatedAt))
                    .foreign_key(&mut profile_fk(FeeRecords::Table, FeeRecords::StudentId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(id_col(InventoryItems::Id))
                    .col(text_col(InventoryItems::Name))
                    .col(text_col(InventoryItems::Category))
                    .col(
                        ColumnDef::new(InventoryItems::Quantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(opt_text_col(InventoryItems::Location))
                    .col(timestamp_col(InventoryItems::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TransferCertificates::Table)
                    .if_not_exists()
                    .col(id_col(TransferCertificates::Id))
                    .col(
                        ColumnDef::new(TransferCertificates::CertificateNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(owner_col(TransferCertificates::StudentId))
                    .col(long_text_col(TransferCertificates::Reason))
                    .col(text_col(TransferCertificates::LeavingDate))
                    .col(text_col(TransferCertificates::Conduct))
                    .col(owner_col(TransferCertificates::IssuedBy))
                    .col(timestamp_col(TransferCertificates::IssuedAt))
                    .foreign_key(&mut profile_fk(
                        TransferCertificates::Table,
                        TransferCertificates::StudentId,
                    ))
                    .foreign_key(&mut profile_fk(
                        TransferCertificates::Table,
                        TransferCertificates::IssuedBy,
                    ))
                    .to_owned(),
            )
            .await?;

        // 个人数据按所有者过滤，需要索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_leave_applications_applicant_id")
                    .table(LeaveApplications::Table)
                    .col(LeaveApplications::ApplicantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_support_tickets_requester_id")
                    .table(SupportTickets::Table)
                    .col(SupportTickets::RequesterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fee_records_student_id")
                    .table(FeeRecords::Table)
                    .col(FeeRecords::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(TransferCertificates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeeRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LibraryBooks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupportTickets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LeaveApplications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TransportRoutes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Profiles {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Name,
    Section,
    ClassTeacherId,
    Room,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    Code,
    Department,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Exams {
    #[sea_orm(iden = "exams")]
    Table,
    Id,
    Title,
    Subject,
    ClassName,
    ExamType,
    StartDate,
    EndDate,
    MaxMarks,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    Title,
    Description,
    Subject,
    ClassName,
    DueDate,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Events {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    Title,
    Description,
    Venue,
    EventDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Announcements {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    Title,
    Content,
    Audience,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Name,
    Code,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    Name,
    HeadName,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TransportRoutes {
    #[sea_orm(iden = "transport_routes")]
    Table,
    Id,
    RouteName,
    VehicleNumber,
    DriverName,
    Stops,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LeaveApplications {
    #[sea_orm(iden = "leave_applications")]
    Table,
    Id,
    ApplicantId,
    LeaveType,
    Reason,
    StartDate,
    EndDate,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SupportTickets {
    #[sea_orm(iden = "support_tickets")]
    Table,
    Id,
    RequesterId,
    Subject,
    Description,
    Status,
    Priority,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LibraryBooks {
    #[sea_orm(iden = "library_books")]
    Table,
    Id,
    Title,
    Author,
    Isbn,
    Category,
    AvailableCopies,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FeeRecords {
    #[sea_orm(iden = "fee_records")]
    Table,
    Id,
    StudentId,
    FeeType,
    Amount,
    Status,
    DueDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InventoryItems {
    #[sea_orm(iden = "inventory_items")]
    Table,
    Id,
    Name,
    Category,
    Quantity,
    Location,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TransferCertificates {
    #[sea_orm(iden = "transfer_certificates")]
    Table,
    Id,
    CertificateNumber,
    StudentId,
    Reason,
    LeavingDate,
    Conduct,
    IssuedBy,
    IssuedAt,
}
