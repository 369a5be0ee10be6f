use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::reservation::{NewReservation, ReservationChanges};

pub struct ReservationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every reservation, grouped by berth with the latest check-in first
    pub async fn get_all(&self) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::BerthNumber)
            .order_by_desc(entity::reservation::Column::CheckIn)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the reservations of one berth with the latest check-in first
    pub async fn get_by_berth(
        &self,
        berth_number: i32,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::BerthNumber.eq(berth_number))
            .order_by_desc(entity::reservation::Column::CheckIn)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_berth_and_id(
        &self,
        berth_number: i32,
        id: i32,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .filter(entity::reservation::Column::BerthNumber.eq(berth_number))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        reservation: NewReservation,
    ) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();

        entity::reservation::ActiveModel {
            berth_number: ActiveValue::Set(reservation.berth_number),
            client_name: ActiveValue::Set(reservation.client_name),
            boat_name: ActiveValue::Set(reservation.boat_name),
            check_in: ActiveValue::Set(reservation.window.check_in()),
            check_out: ActiveValue::Set(reservation.window.check_out()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        reservation: entity::reservation::Model,
        changes: ReservationChanges,
    ) -> Result<entity::reservation::Model, DbErr> {
        let mut active_model: entity::reservation::ActiveModel = reservation.into();

        if let Some(client_name) = changes.client_name {
            active_model.client_name = ActiveValue::Set(client_name);
        }
        if let Some(boat_name) = changes.boat_name {
            active_model.boat_name = ActiveValue::Set(boat_name);
        }
        active_model.check_in = ActiveValue::Set(changes.window.check_in());
        active_model.check_out = ActiveValue::Set(changes.window.check_out());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every reservation of a berth, returning how many were removed
    pub async fn delete_by_berth(&self, berth_number: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::BerthNumber.eq(berth_number))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves every reservation of a berth to a new berth number
    pub async fn reassign_berth(&self, from: i32, to: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(entity::reservation::Column::BerthNumber, Expr::value(to))
            .col_expr(
                entity::reservation::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::reservation::Column::BerthNumber.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
