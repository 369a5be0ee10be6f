use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::catway::{CatwayChanges, NewCatway};

pub struct CatwayRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatwayRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns all catways ordered by berth number
    pub async fn get_all(&self) -> Result<Vec<entity::catway::Model>, DbErr> {
        entity::prelude::Catway::find()
            .order_by_asc(entity::catway::Column::Number)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::catway::Model>, DbErr> {
        entity::prelude::Catway::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_number(
        &self,
        number: i32,
    ) -> Result<Option<entity::catway::Model>, DbErr> {
        entity::prelude::Catway::find()
            .filter(entity::catway::Column::Number.eq(number))
            .one(self.db)
            .await
    }

    /// Checks whether a berth number is used by any catway other than `exclude_id`
    pub async fn number_taken(&self, number: i32, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Catway::find().filter(entity::catway::Column::Number.eq(number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::catway::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, fields: NewCatway) -> Result<entity::catway::Model, DbErr> {
        let now = Utc::now();

        entity::catway::ActiveModel {
            number: ActiveValue::Set(fields.number),
            category: ActiveValue::Set(fields.category.as_str().to_string()),
            state: ActiveValue::Set(fields.state),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies the given changes to a catway; unset fields keep their stored value
    pub async fn update(
        &self,
        catway: entity::catway::Model,
        changes: CatwayChanges,
    ) -> Result<entity::catway::Model, DbErr> {
        let mut active_model: entity::catway::ActiveModel = catway.into();

        if let Some(number) = changes.number {
            active_model.number = ActiveValue::Set(number);
        }
        if let Some(category) = changes.category {
            active_model.category = ActiveValue::Set(category.as_str().to_string());
        }
        if let Some(state) = changes.state {
            active_model.state = ActiveValue::Set(state);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Catway::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
