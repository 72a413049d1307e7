use crate::entities::{patient, professional, service};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, QueryOrder,
};
use uuid::Uuid;

/// A flat record entity listed in name order. Implemented by the three leaf
/// resources; slots have their own service.
pub trait NamedRecord: EntityTrait {
    fn name_column() -> Self::Column;
}

impl NamedRecord for patient::Entity {
    fn name_column() -> Self::Column {
        patient::Column::Name
    }
}

impl NamedRecord for service::Entity {
    fn name_column() -> Self::Column {
        service::Column::Name
    }
}

impl NamedRecord for professional::Entity {
    fn name_column() -> Self::Column {
        professional::Column::Name
    }
}

/// Lists every record of the entity, ordered by name ascending
pub async fn list_by_name<E>(db: &DatabaseConnection) -> Result<Vec<E::Model>, DbErr>
where
    E: NamedRecord,
{
    E::find().order_by_asc(E::name_column()).all(db).await
}

/// Inserts a fully populated active model and returns the stored record
pub async fn insert_record<A>(
    db: &DatabaseConnection,
    record: A,
) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    record.insert(db).await
}

/// Updates the record with the given id. Returns `None` when no such record
/// exists; the caller reports that distinctly from success.
pub async fn update_record<A>(
    db: &DatabaseConnection,
    id: Uuid,
    record: A,
) -> Result<Option<<A::Entity as EntityTrait>::Model>, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    <<A::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    if <A::Entity as EntityTrait>::find_by_id(id).one(db).await?.is_none() {
        return Ok(None);
    }

    record.update(db).await.map(Some)
}

/// Deletes the record with the given id, returning the deleted record, or
/// `None` when it was absent
pub async fn delete_record<E>(db: &DatabaseConnection, id: Uuid) -> Result<Option<E::Model>, DbErr>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    let Some(found) = E::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    E::delete_by_id(id).exec(db).await?;

    Ok(Some(found))
}
