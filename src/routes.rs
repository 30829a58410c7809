use super::{controllers, models};
use axum::routing::{delete, get, post, Router};

#[rustfmt::skip]
pub fn get_routes() -> Router<models::AppState> {
    Router::new()
        .route("/", get(controllers::root))
        .route("/welcome", get(controllers::welcome))
        .route("/authentication/login", get(controllers::login_form))
        .route("/authentication/login", post(controllers::handle_login))
        .route("/authentication/register", get(controllers::register_form))
        .route("/authentication/register", post(controllers::handle_register))
        .route("/authentication/logout", post(controllers::logout))
        .route("/notes", get(controllers::list_notes))
        .route("/note", post(controllers::create_note))
        .route("/note/:id", get(controllers::note_editor))
        .route("/note/:id", post(controllers::save_note))
        .route("/note/:id", delete(controllers::delete_note))
        .route("/note/:id/pin", post(controllers::toggle_pinned))
        .route("/folder", post(controllers::create_folder))
        .route("/admin", get(controllers::admin_panel))
        .route("/language", post(controllers::set_language))
        .route("/ping", get(controllers::pong))
        .fallback(controllers::not_found)
}
