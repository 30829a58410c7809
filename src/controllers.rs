use super::{
    auth, components,
    components::Component,
    config, db_ops,
    db_ops::DbModel,
    errors::ServerError,
    extractors::{AuthenticatedUser, Lang},
    htmx, lang, models,
    models::{AppState, Folder, Note, NotePatch, Role, User},
    session,
};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use futures::join;
use serde::Deserialize;
use uuid::Uuid;

#[cfg(feature = "live_reload")]
#[derive(Deserialize)]
pub struct PongParams {
    pub poll_interval_secs: u64,
}
/// The client will reload when this HTTP long-polling route disconnects,
/// effectively implementing live-reloading.
#[cfg(feature = "live_reload")]
pub async fn pong(
    Query(PongParams { poll_interval_secs }): Query<PongParams>,
) -> impl IntoResponse {
    tokio::time::sleep(std::time::Duration::from_secs(poll_interval_secs))
        .await;
    "pong"
}

#[cfg(not(feature = "live_reload"))]
pub async fn pong() -> impl IntoResponse {
    "pong"
}

#[derive(Deserialize)]
pub struct NotesParams {
    pub folder: Option<Uuid>,
    pub search: Option<String>,
}

pub async fn root(
    State(AppState { db }): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Lang(lang): Lang,
    Query(params): Query<NotesParams>,
) -> Result<impl IntoResponse, ServerError> {
    let folders = Folder::list(
        &db,
        &db_ops::ListFolderQuery { user_id: user.id },
    )
    .await?;

    let page = components::Page {
        title: lang::t(lang, "appName").to_string(),
        children: Box::new(components::Home {
            lang,
            user: &user,
            folders: &folders,
            selected_folder: params.folder,
            search: params.search.as_deref().unwrap_or(""),
        }),
    }
    .render();
    Ok(page)
}

/// The note grid fragment. Every render is a fresh read of the full note
/// list; the folder/search/pinned views are linear scans over it.
pub async fn list_notes(
    State(AppState { db }): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Lang(lang): Lang,
    Query(params): Query<NotesParams>,
) -> Result<impl IntoResponse, ServerError> {
    let note_query = db_ops::ListNoteQuery { user_id: user.id };
    let folder_query = db_ops::ListFolderQuery { user_id: user.id };
    let (notes, folders) = join!(
        Note::list(&db, &note_query),
        Folder::list(&db, &folder_query)
    );
    let notes = notes?;
    let folders = folders?;

    let notes = match params.folder {
        Some(folder_id) => models::filter_by_folder(notes, folder_id),
        None => notes,
    };
    let search = params.search.as_deref().unwrap_or("");
    let notes = if search.is_empty() {
        notes
    } else {
        models::filter_by_search(notes, search)
    };
    let (mut pinned, mut unpinned) = models::partition_pinned(notes);
    models::sort_newest_created_first(&mut pinned);
    models::sort_newest_first(&mut unpinned);

    Ok(components::NoteGrid {
        lang,
        pinned: &pinned,
        unpinned: &unpinned,
        folders: &folders,
        selected_folder: params.folder,
        search,
    }
    .render())
}

#[derive(Deserialize)]
pub struct CreateNoteForm {
    title: String,
    folder: Uuid,
}
pub async fn create_note(
    State(AppState { db }): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Lang(lang): Lang,
    Form(form): Form<CreateNoteForm>,
) -> Result<impl IntoResponse, ServerError> {
    let title = form.title.trim();
    let title = if title.is_empty() {
        lang::t(lang, "untitledNote")
    } else {
        title
    };
    let note = Note::create(user.id, title, form.folder);
    note.save(&db).await?;

    // The insert has committed by the time the client navigates, so the
    // editor can never land on a note the backend rejected.
    Ok((
        StatusCode::CREATED,
        htmx::redirect(&format!("/note/{}", note.id)),
        "OK",
    ))
}

pub async fn note_editor(
    State(AppState { db }): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Lang(lang): Lang,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    let note = Note::get(
        &db,
        &db_ops::GetNoteQuery {
            user_id: user.id,
            id,
        },
    )
    .await?;
    let note = match note {
        Some(n) => n,
        None => {
            return Ok(components::Page {
                title: lang::t(lang, "noteEditor").to_string(),
                children: Box::new(components::NoteNotFound { lang }),
            }
            .render())
        }
    };
    let folders = Folder::list(
        &db,
        &db_ops::ListFolderQuery { user_id: user.id },
    )
    .await?;

    let editor = components::NoteEditor {
        lang,
        note: &note,
        folders: &folders,
    };
    Ok(if headers.contains_key("Hx-Request") {
        editor.render()
    } else {
        components::Page {
            title: format!(
                "{} | {}",
                lang::t(lang, "noteEditor"),
                lang::t(lang, "appName")
            ),
            children: Box::new(editor),
        }
        .render()
    })
}

#[derive(Deserialize)]
pub struct EditorForm {
    title: Option<String>,
    content: Option<String>,
    folder: Option<Uuid>,
}
/// Autosave target. The editor form posts here after its debounce quiet
/// period; the response swaps the saved-at indicator.
pub async fn save_note(
    State(AppState { db }): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Lang(lang): Lang,
    Path(id): Path<Uuid>,
    Form(form): Form<EditorForm>,
) -> Result<impl IntoResponse, ServerError> {
    let note = Note::get(
        &db,
        &db_ops::GetNoteQuery {
            user_id: user.id,
            id,
        },
    )
    .await?;
    let mut note = match note {
        // The note went away under the open editor (deleted in another
        // tab); bounce home rather than resurrecting it.
        None => return Ok((htmx::redirect("/"), "".to_string())),
        Some(n) => n,
    };
    note.apply(NotePatch {
        title: form.title,
        content: form.content,
        folder_id: form.folder,
    });
    note.save(&db).await?;

    Ok((
        HeaderMap::new(),
        components::SavedIndicator {
            lang,
            saved_at: note.updated_at,
        }
        .render(),
    ))
}

#[derive(Deserialize)]
pub struct DeleteParams {
    from: Option<String>,
}
pub async fn delete_note(
    State(AppState { db }): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, ServerError> {
    let note = Note::get(
        &db,
        &db_ops::GetNoteQuery {
            user_id: user.id,
            id,
        },
    )
    .await?;
    if let Some(note) = note {
        note.delete(&db).await?;
    }

    let headers = if params.from.as_deref() == Some("editor") {
        htmx::redirect("/")
    } else {
        htmx::trigger_event(HeaderMap::new(), "reload-notes")
    };
    Ok((headers, ""))
}

pub async fn toggle_pinned(
    State(AppState { db }): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    let note = Note::get(
        &db,
        &db_ops::GetNoteQuery {
            user_id: user.id,
            id,
        },
    )
    .await?;
    if let Some(mut note) = note {
        note.toggle_pinned();
        note.save(&db).await?;
    }

    // The card moves between the pinned and unpinned sections, so reload
    // the whole grid rather than patching one card in place.
    Ok((htmx::trigger_event(HeaderMap::new(), "reload-notes"), ""))
}

#[derive(Deserialize)]
pub struct FolderForm {
    name: String,
    color: Option<String>,
}
pub async fn create_folder(
    State(AppState { db }): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Form(form): Form<FolderForm>,
) -> Result<impl IntoResponse, ServerError> {
    let color = form.color.filter(|c| !c.is_empty());
    let folder = Folder::create(user.id, form.name.trim(), color);
    folder.save(&db).await?;

    // The sidebar and the create-note folder select both change; a full
    // refresh is simpler than patching two fragments.
    Ok((StatusCode::CREATED, htmx::refresh(), "OK"))
}

pub async fn welcome(Lang(lang): Lang) -> impl IntoResponse {
    components::Page {
        title: lang::t(lang, "appName").to_string(),
        children: Box::new(components::Welcome { lang }),
    }
    .render()
}

fn auth_page(
    lang: &'static str,
    mode: components::AuthMode,
    error: Option<String>,
    notice: Option<String>,
) -> String {
    components::Page {
        title: lang::t(lang, "appName").to_string(),
        children: Box::new(components::AuthForm {
            lang,
            mode,
            error,
            notice,
        }),
    }
    .render()
}

pub async fn login_form(Lang(lang): Lang) -> impl IntoResponse {
    auth_page(lang, components::AuthMode::Login, None, None)
}

pub async fn register_form(Lang(lang): Lang) -> impl IntoResponse {
    auth_page(lang, components::AuthMode::Register, None, None)
}

#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}
pub async fn handle_login(
    State(AppState { db }): State<AppState>,
    Lang(lang): Lang,
    Form(form): Form<LoginForm>,
) -> Result<Response, ServerError> {
    match auth::authenticate(&db, &form.email, &form.password).await {
        Ok(session) => {
            let cookie = session::serialize_session(&session);
            let mut headers = HeaderMap::new();
            headers.insert(
                "Set-Cookie",
                HeaderValue::from_str(&format!(
                    "session={cookie}; Path=/; HttpOnly; Max-Age={}",
                    config::SESSION_TTL_SECS
                ))?,
            );
            headers.insert("Location", HeaderValue::from_static("/"));
            Ok((StatusCode::FOUND, headers).into_response())
        }
        Err(e) => {
            println!("login failed for {}: {e}", form.email);
            Ok(auth_page(
                lang,
                components::AuthMode::Login,
                Some(lang::t(lang, "badCredentials").to_string()),
                None,
            )
            .into_response())
        }
    }
}

#[derive(Deserialize)]
pub struct RegisterForm {
    username: String,
    email: String,
    password: String,
}
pub async fn handle_register(
    State(AppState { db }): State<AppState>,
    Lang(lang): Lang,
    Form(form): Form<RegisterForm>,
) -> Result<Response, ServerError> {
    if form.password.len() < 6 {
        return Ok(auth_page(
            lang,
            components::AuthMode::Register,
            Some("Password must be at least 6 characters".to_string()),
            None,
        )
        .into_response());
    }
    match auth::register(&db, &form.username, &form.email, &form.password)
        .await
    {
        Ok(_) => Ok(auth_page(
            lang,
            components::AuthMode::Login,
            None,
            Some(lang::t(lang, "registered").to_string()),
        )
        .into_response()),
        Err(e) => {
            println!("registration failed for {}: {e}", form.email);
            Ok(auth_page(
                lang,
                components::AuthMode::Register,
                Some(e.to_string()),
                None,
            )
            .into_response())
        }
    }
}

pub async fn logout() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Set-Cookie",
        HeaderValue::from_static("session=; Path=/; HttpOnly; Max-Age=0"),
    );
    headers.insert("Location", HeaderValue::from_static("/welcome"));
    (StatusCode::FOUND, headers)
}

pub async fn admin_panel(
    State(AppState { db }): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Lang(lang): Lang,
) -> Result<Response, ServerError> {
    if user.role != Role::Admin {
        let mut headers = HeaderMap::new();
        headers.insert("Location", HeaderValue::from_static("/"));
        return Ok((StatusCode::FOUND, headers).into_response());
    }

    let user_query = db_ops::ListUserQuery {};
    let (users, user_count, note_count, folder_count) = join!(
        User::list(&db, &user_query),
        db_ops::count_users(&db),
        db_ops::count_notes(&db),
        db_ops::count_folders(&db)
    );
    let users = users?;

    let page = components::Page {
        title: lang::t(lang, "admin").to_string(),
        children: Box::new(components::AdminPanel {
            lang,
            user_count: user_count?,
            note_count: note_count?,
            folder_count: folder_count?,
            users: &users,
        }),
    }
    .render();
    Ok(page.into_response())
}

#[derive(Deserialize)]
pub struct LanguageForm {
    lang: String,
}
pub async fn set_language(
    Form(form): Form<LanguageForm>,
) -> impl IntoResponse {
    let mut headers = htmx::refresh();
    // unknown codes are silently ignored; the refresh just redraws the
    // page in the current language
    if let Some(l) = lang::by_code(&form.lang) {
        headers.insert(
            "Set-Cookie",
            HeaderValue::from_str(&format!(
                "lang={}; Path=/; Max-Age=31536000",
                l.code
            ))
            .expect("language codes are ascii"),
        );
    }
    (headers, "")
}

pub async fn not_found(Lang(lang): Lang) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        components::Page {
            title: lang::t(lang, "pageNotFound").to_string(),
            children: Box::new(components::NotFound { lang }),
        }
        .render(),
    )
}
