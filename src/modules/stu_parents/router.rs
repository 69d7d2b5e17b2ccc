use axum::{Router, routing::get};

use crate::modules::stu_parents::controller::{
    create_parent, delete_parent, get_parent, get_parents, update_parent,
};
use crate::state::AppState;

pub fn init_stu_parents_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_parents).post(create_parent))
        .route(
            "/{id}",
            get(get_parent)
                .put(update_parent)
                .patch(update_parent)
                .delete(delete_parent),
        )
}
