//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{NewUser, User, UserPatch};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
        }
    }
}

impl From<NewUser> for ActiveModel {
    fn from(new_user: NewUser) -> Self {
        ActiveModel {
            name: Set(new_user.name),
            email: Set(new_user.email),
            ..Default::default()
        }
    }
}

impl ActiveModel {
    /// Mark only the columns present in `patch` as changed.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = Set(name);
        }
        if let Some(email) = patch.email {
            self.email = Set(email);
        }
    }
}
