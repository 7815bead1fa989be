use super::{SeaOrmStorage, db_err, pagination_info};
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::errors::Result;
use crate::models::exams::{
    entities::Exam,
    requests::{CreateExamRequest, ExamListQuery},
    responses::ExamListResponse,
};
use crate::utils::DATE_FORMAT;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_exam_impl(&self, created_by: i64, req: CreateExamRequest) -> Result<Exam> {
        let model = ActiveModel {
            title: Set(req.title.trim().to_string()),
            subject: Set(req.subject.trim().to_string()),
            class_name: Set(req.class_name.trim().to_string()),
            exam_type: Set(req.exam_type),
            start_date: Set(req.start_date.format(DATE_FORMAT).to_string()),
            end_date: Set(req.end_date.format(DATE_FORMAT).to_string()),
            max_marks: Set(req.max_marks),
            created_by: Set(created_by),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("Failed to create exam"))?;

        Ok(result.into_exam())
    }

    pub async fn get_exam_by_id_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("Failed to load exam"))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 按开考日期排序，最近的在前
    pub async fn list_exams_with_pagination_impl(
        &self,
        query: ExamListQuery,
    ) -> Result<ExamListResponse> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = Exams::find();
        if let Some(class_name) = query.class_name.as_deref().map(str::trim)
            && !class_name.is_empty()
        {
            select = select.filter(Column::ClassName.eq(class_name));
        }

        let paginator = select
            .order_by_desc(Column::StartDate)
            .order_by_desc(Column::Id)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_err("Failed to count exams"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_err("Failed to count exam pages"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_err("Failed to list exams"))?;

        Ok(ExamListResponse {
            items: rows.into_iter().map(|m| m.into_exam()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }

    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("Failed to delete exam"))?;

        Ok(result.rows_affected > 0)
    }
}
