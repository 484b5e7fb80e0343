//! Plain table-backed [`Repository`] for resources without side tables.
//!
//! Each input type says how its fields land on the entity's active model
//! through [`ApplyInput`]; identity, ordering and removal come from the
//! entity's primary key.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

use crate::errors::ServiceError;
use crate::repository::Repository;

/// Copies every client-writable field onto an active model.
pub trait ApplyInput<A> {
    fn apply(self, am: &mut A);
}

pub struct SeaOrmRepository<E, I> {
    pub db: DatabaseConnection,
    _marker: PhantomData<fn() -> (E, I)>,
}

impl<E, I> SeaOrmRepository<E, I> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _marker: PhantomData } }
}

#[async_trait]
impl<E, I> Repository for SeaOrmRepository<E, I>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    I: ApplyInput<E::ActiveModel> + Send + 'static,
{
    type Record = E::Model;
    type Input = I;

    async fn insert(&self, input: I) -> Result<E::Model, ServiceError> {
        let mut am = <E::ActiveModel as ActiveModelTrait>::default();
        input.apply(&mut am);
        Ok(am.insert(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<E::Model>, ServiceError> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<E::Model>, ServiceError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        Ok(query.all(&self.db).await?)
    }

    async fn update(&self, id: i32, input: I) -> Result<Option<E::Model>, ServiceError> {
        let Some(existing) = E::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am = existing.into_active_model();
        input.apply(&mut am);
        Ok(Some(am.update(&self.db).await?))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let res = E::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
