use sea_orm::{entity::prelude::*, sea_query::OnConflict, ConnectionTrait, PaginatorTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Primary key of the one and only row.
pub const RECORD_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "file")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Load the record, `None` if the row was never inserted.
pub async fn find<C: ConnectionTrait>(db: &C) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(RECORD_ID).one(db).await?)
}

/// Insert the empty record unless it already exists. Returns whether a row was inserted.
pub async fn insert_default<C: ConnectionTrait>(db: &C) -> Result<bool, errors::ModelError> {
    if find(db).await?.is_some() {
        return Ok(false);
    }
    let am = ActiveModel { id: Set(RECORD_ID), content: Set(String::new()) };
    let inserted = Entity::insert(am)
        .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;
    Ok(inserted > 0)
}

/// Overwrite the content unconditionally, creating the row if it is missing.
pub async fn upsert<C: ConnectionTrait>(db: &C, content: &str) -> Result<(), errors::ModelError> {
    let am = ActiveModel { id: Set(RECORD_ID), content: Set(content.to_owned()) };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_column(Column::Content)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(())
}

/// Count rows in the table; used to check the single-row invariant.
pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, errors::ModelError> {
    Ok(Entity::find().count(db).await?)
}
