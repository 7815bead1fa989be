use super::{SeaOrmStorage, db_err, pagination_info};
use crate::entity::contact_inquiries::{ActiveModel, Column, Entity as ContactInquiries};
use crate::errors::Result;
use crate::models::contact::{
    entities::ContactInquiry, requests::ContactRequest, responses::ContactListResponse,
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_contact_inquiry_impl(&self, req: ContactRequest) -> Result<ContactInquiry> {
        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            email: Set(req.email.trim().to_lowercase()),
            phone: Set(req
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())),
            message: Set(req.message.trim().to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("Failed to save contact inquiry"))?;

        Ok(result.into_inquiry())
    }

    pub async fn list_contact_inquiries_impl(
        &self,
        page: u64,
        size: u64,
    ) -> Result<ContactListResponse> {
        let page = page.max(1);
        let size = size.clamp(1, 100);

        let paginator = ContactInquiries::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_err("Failed to count contact inquiries"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_err("Failed to count contact inquiry pages"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_err("Failed to list contact inquiries"))?;

        Ok(ContactListResponse {
            items: rows.into_iter().map(|m| m.into_inquiry()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }
}
