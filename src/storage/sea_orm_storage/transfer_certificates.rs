use super::{SeaOrmStorage, db_err, pagination_info};
use crate::entity::transfer_certificates::{ActiveModel, Column, Entity as TransferCertificates};
use crate::errors::Result;
use crate::models::transfer_certificates::{
    entities::TransferCertificate,
    requests::{CertificateListQuery, IssueCertificateRequest},
    responses::CertificateListResponse,
};
use crate::utils::DATE_FORMAT;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn issue_certificate_impl(
        &self,
        issued_by: i64,
        certificate_number: String,
        req: IssueCertificateRequest,
    ) -> Result<TransferCertificate> {
        let model = ActiveModel {
            certificate_number: Set(certificate_number),
            student_id: Set(req.student_id),
            reason: Set(req.reason.trim().to_string()),
            leaving_date: Set(req.leaving_date.format(DATE_FORMAT).to_string()),
            conduct: Set(req.conduct.trim().to_string()),
            issued_by: Set(issued_by),
            issued_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("Failed to issue transfer certificate"))?;

        Ok(result.into_certificate())
    }

    pub async fn get_certificate_by_id_impl(&self, id: i64) -> Result<Option<TransferCertificate>> {
        let result = TransferCertificates::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("Failed to load transfer certificate"))?;

        Ok(result.map(|m| m.into_certificate()))
    }

    pub async fn list_certificates_with_pagination_impl(
        &self,
        query: CertificateListQuery,
    ) -> Result<CertificateListResponse> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = TransferCertificates::find();
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let paginator = select
            .order_by_desc(Column::IssuedAt)
            .order_by_desc(Column::Id)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_err("Failed to count transfer certificates"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_err("Failed to count transfer certificate pages"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_err("Failed to list transfer certificates"))?;

        Ok(CertificateListResponse {
            items: rows.into_iter().map(|m| m.into_certificate()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }
}
