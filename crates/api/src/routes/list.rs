//! Route definitions for the `/lists` resource.
//!
//! Also nests submission routes and presentation creation under
//! `/lists/{list_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{list, presentation, submission};
use crate::state::AppState;

/// Routes mounted at `/lists`.
///
/// ```text
/// GET    /                                          -> list (staff)
/// POST   /                                          -> create (staff)
/// GET    /{id}                                      -> get_by_id (staff)
/// DELETE /{id}                                      -> delete (staff)
/// POST   /{id}/clear                                -> clear (staff)
///
/// POST   /{list_id}/submissions                     -> create (public form)
/// GET    /{list_id}/submissions                     -> list_by_list (staff)
/// GET    /{list_id}/submissions/{id}                -> get_by_id (staff)
/// PUT    /{list_id}/submissions/{id}                -> update (staff)
/// DELETE /{list_id}/submissions/{id}                -> delete (staff)
/// POST   /{list_id}/submissions/{id}/audition-number -> allocate (staff)
///
/// POST   /{list_id}/presentations                   -> snapshot favorites (staff)
/// ```
pub fn router() -> Router<AppState> {
    let submission_routes = Router::new()
        .route(
            "/",
            get(submission::list_by_list).post(submission::create),
        )
        .route(
            "/{id}",
            get(submission::get_by_id)
                .put(submission::update)
                .delete(submission::delete),
        )
        .route(
            "/{id}/audition-number",
            post(submission::allocate_audition_number),
        );

    Router::new()
        .route("/", get(list::list).post(list::create))
        .route("/{id}", get(list::get_by_id).delete(list::delete))
        .route("/{id}/clear", post(list::clear))
        .nest("/{list_id}/submissions", submission_routes)
        .route("/{list_id}/presentations", post(presentation::create))
}
