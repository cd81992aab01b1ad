use sceneboard_core::resource::Labels;
use sceneboard_db::models::user::{CreateUser, CreatedUser, UpdateUser, UpdatedUser, User, UserView};
use sceneboard_db::{Repository, Store};

use super::Resource;
use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// `/api/users`. Passwords are hashed on create and never projected.
pub struct Users;

impl Resource for Users {
    type Entity = User;
    type Create = CreateUser;
    type Update = UpdateUser;

    type View = UserView;
    type Created = CreatedUser;
    type Updated = UpdatedUser;

    const LABELS: Labels = Labels {
        entity: "User",
        plural: "users",
    };
    const PATH: &'static str = "/users";

    fn repository(store: &dyn Store) -> &dyn Repository<User> {
        store.users()
    }

    fn prepare_create(mut input: CreateUser) -> AppResult<CreateUser> {
        input.password = hash_password(&input.password)
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
        Ok(input)
    }
}
