use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::auth::controller::store_user;
use crate::modules::users::controller::{delete_user, get_user, get_users, update_user};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(store_user).get(get_users))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
