use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{catway::CatwayRepository, reservation::ReservationRepository},
    error::AppError,
    model::catway::{
        Catway, CatwayCategory, CatwayChanges, CreateCatwayParams, NewCatway, UpdateCatwayParams,
    },
    service::berth_lock::BerthLocks,
    util::parse::{check_max_length, non_blank},
};

/// Maximum length of a catway state description.
const MAX_STATE_LENGTH: usize = 500;

pub struct CatwayService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a BerthLocks,
}

impl<'a> CatwayService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a BerthLocks) -> Self {
        Self { db, locks }
    }

    /// Lists all catways ordered by number
    pub async fn list_all(&self) -> Result<Vec<Catway>, AppError> {
        let catways = CatwayRepository::new(self.db).get_all().await?;

        catways.into_iter().map(Catway::from_entity).collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Catway, AppError> {
        let catway = CatwayRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(catway_not_found)?;

        Catway::from_entity(catway)
    }

    /// Looks a catway up by its berth number; an unused number is not an error.
    pub async fn get_by_number(&self, number: i32) -> Result<Option<Catway>, AppError> {
        CatwayRepository::new(self.db)
            .find_by_number(number)
            .await?
            .map(Catway::from_entity)
            .transpose()
    }

    /// Creates a catway after validating all three fields and the number's uniqueness
    pub async fn create(&self, params: CreateCatwayParams) -> Result<Catway, AppError> {
        let fields = validate_new_catway(params)?;
        let repo = CatwayRepository::new(self.db);

        if repo.number_taken(fields.number, None).await? {
            return Err(duplicate_number(fields.number));
        }

        let number = fields.number;
        let catway = repo
            .create(fields)
            .await
            .map_err(|e| AppError::from_unique_violation(e, &duplicate_message(number)))?;

        tracing::info!("Created catway {} ({})", catway.number, catway.category);

        Catway::from_entity(catway)
    }

    /// Replaces every field of a catway
    ///
    /// Follows the same validation rules as `create`.
    pub async fn replace(&self, id: i32, params: CreateCatwayParams) -> Result<Catway, AppError> {
        let existing = CatwayRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(catway_not_found)?;

        let fields = validate_new_catway(params)?;

        self.apply_changes(existing, fields.into()).await
    }

    /// Updates only the provided fields of a catway
    pub async fn patch(&self, id: i32, params: UpdateCatwayParams) -> Result<Catway, AppError> {
        let existing = CatwayRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(catway_not_found)?;

        let changes = CatwayChanges {
            number: params.number.map(validate_number).transpose()?,
            category: params
                .category
                .map(|c| validate_category(&c))
                .transpose()?,
            state: params.state.map(validate_state).transpose()?,
        };

        self.apply_changes(existing, changes).await
    }

    /// Deletes a catway together with every reservation of its berth
    ///
    /// Both deletions commit in one transaction while the berth is locked, so no booking
    /// can be created for the berth in between.
    pub async fn remove(&self, id: i32) -> Result<Catway, AppError> {
        let existing = CatwayRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(catway_not_found)?;

        let _guard = self.locks.acquire(existing.number).await;
        let txn = self.db.begin().await?;

        let catway = CatwayRepository::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or_else(catway_not_found)?;
        if catway.number != existing.number {
            return Err(concurrent_renumber());
        }

        let removed = ReservationRepository::new(&txn)
            .delete_by_berth(catway.number)
            .await?;
        CatwayRepository::new(&txn).delete(catway.id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted catway {} and {} reservation(s)",
            catway.number,
            removed
        );

        Catway::from_entity(catway)
    }

    /// Persists validated changes, moving the berth's reservations along when the
    /// number changes
    async fn apply_changes(
        &self,
        existing: entity::catway::Model,
        changes: CatwayChanges,
    ) -> Result<Catway, AppError> {
        let new_number = changes.number.filter(|number| *number != existing.number);

        let Some(new_number) = new_number else {
            let catway = CatwayRepository::new(self.db)
                .update(existing, changes)
                .await?;
            return Catway::from_entity(catway);
        };

        if CatwayRepository::new(self.db)
            .number_taken(new_number, Some(existing.id))
            .await?
        {
            return Err(duplicate_number(new_number));
        }

        let _guard = self.locks.acquire(existing.number).await;
        let txn = self.db.begin().await?;

        let current = CatwayRepository::new(&txn)
            .find_by_id(existing.id)
            .await?
            .ok_or_else(catway_not_found)?;
        if current.number != existing.number {
            return Err(concurrent_renumber());
        }

        let catway = CatwayRepository::new(&txn)
            .update(current, changes)
            .await
            .map_err(|e| AppError::from_unique_violation(e, &duplicate_message(new_number)))?;
        let moved = ReservationRepository::new(&txn)
            .reassign_berth(existing.number, new_number)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Renumbered catway {} to {}, moved {} reservation(s)",
            existing.number,
            new_number,
            moved
        );

        Catway::from_entity(catway)
    }
}

fn validate_new_catway(params: CreateCatwayParams) -> Result<NewCatway, AppError> {
    let (Some(number), Some(category), Some(state)) = (
        params.number,
        non_blank(params.category),
        non_blank(params.state),
    ) else {
        return Err(AppError::Validation(
            "All fields are required (number, category, state)".to_string(),
        ));
    };

    Ok(NewCatway {
        number: validate_number(number)?,
        category: validate_category(&category)?,
        state: validate_state(state)?,
    })
}

fn validate_number(number: i64) -> Result<i32, AppError> {
    i32::try_from(number)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| AppError::Validation("number must be a positive integer".to_string()))
}

fn validate_category(category: &str) -> Result<CatwayCategory, AppError> {
    CatwayCategory::parse(category.trim()).ok_or_else(|| {
        AppError::Validation("category must be either 'long' or 'short'".to_string())
    })
}

fn validate_state(state: String) -> Result<String, AppError> {
    let state = state.trim().to_string();

    if state.is_empty() {
        return Err(AppError::Validation("state cannot be empty".to_string()));
    }
    check_max_length("state", &state, MAX_STATE_LENGTH)?;

    Ok(state)
}

fn catway_not_found() -> AppError {
    AppError::NotFound("Catway not found".to_string())
}

fn duplicate_message(number: i32) -> String {
    format!("Catway number {} already exists", number)
}

fn duplicate_number(number: i32) -> AppError {
    AppError::Conflict(duplicate_message(number))
}

pub(super) fn concurrent_renumber() -> AppError {
    AppError::Conflict("Catway was modified concurrently, please retry".to_string())
}
