use super::{
    config, lang,
    lang::t,
    models::{Folder, Note, Role, User},
};
use ammonia::clean;
use chrono::{DateTime, Utc};
use std::fmt::Write;
use uuid::Uuid;

#[cfg(feature = "live_reload")]
const LIVE_RELOAD_SCRIPT: &str = r#"<script>
    (async () => {
        while (true) {
            try {
                await fetch('/ping?poll_interval_secs=60');
            } catch (e) {
                console.log("hup from ping; let's live-reload");
                const el = document.createElement('p');
                el.innerText = "Reloading...";
                el.classList.add("banner");
                document.body.insertBefore(el, document.body.firstChild);
                setInterval(async () => {
                    setTimeout(() => {
                        // At some point, a compiler error may be preventing
                        // the server from coming back
                        el.innerText = "Reload taking longer than usual; check for a compiler error";
                    }, 2000);
                    // Now the server is down, we'll fast-poll it (trying to
                    // get an immediate response), and reload the page when it
                    // comes back
                    try {
                        await fetch('/ping?poll_interval_secs=0');
                        window.location.reload()
                    } catch (e) {}
                }, 100);
                break;
            }
        }
    })();
</script>"#;

#[cfg(not(feature = "live_reload"))]
const LIVE_RELOAD_SCRIPT: &str = "";

pub trait Component {
    /// Render the component to a HTML string. By convention, the
    /// implementation should sanitize all string properties at render-time
    fn render(&self) -> String;
}

pub struct Page<'a> {
    pub title: String,
    pub children: Box<dyn Component + 'a>,
}

impl Component for Page<'_> {
    fn render(&self) -> String {
        let styles = include_str!("./style.css");
        format!(
            r#"
            <html>
                <head>
                    <meta name="viewport" content="width=device-width, initial-scale=1.0"></meta>
                    <title>{title}</title>
                    <style>
                        {styles}
                    </style>
                    {LIVE_RELOAD_SCRIPT}
                </head>
                <body hx-boost="true">
                    {body_html}
                    <script src="https://unpkg.com/htmx.org@1.9.6"></script>
                    <script>
                        htmx.config.defaultSwapStyle = "outerHTML"
                    </script>
                </body>
            </html>
            "#,
            styles = styles,
            title = clean(&self.title),
            body_html = self.children.render()
        )
    }
}

/// [`clean`] sanitizes element content but leaves `"` alone, which is all it
/// takes to break out of a double-quoted attribute. Any user-controlled
/// string interpolated into an attribute position goes through here instead.
fn clean_attr(value: &str) -> String {
    clean(value).replace('"', "&quot;")
}

/// Minimal query-string escaping for the handful of characters that would
/// break out of a `?search=` parameter. Uuids and language codes never need
/// this; user-typed search text does.
fn encode_query(val: &str) -> String {
    let mut out = String::with_capacity(val.len());
    for c in val.chars() {
        match c {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '=' => out.push_str("%3D"),
            '+' => out.push_str("%2B"),
            '#' => out.push_str("%23"),
            ' ' => out.push_str("%20"),
            '"' => out.push_str("%22"),
            '\'' => out.push_str("%27"),
            _ => out.push(c),
        }
    }
    out
}

fn notes_url(selected_folder: Option<Uuid>, search: &str) -> String {
    let mut url = "/notes".to_string();
    let mut sep = '?';
    if let Some(folder) = selected_folder {
        let _ = write!(url, "{sep}folder={folder}");
        sep = '&';
    }
    if !search.is_empty() {
        let _ = write!(url, "{sep}search={}", encode_query(search));
    }
    url
}

pub struct LanguageSelector {
    pub lang: &'static str,
}
impl Component for LanguageSelector {
    fn render(&self) -> String {
        let options =
            lang::LANGUAGES
                .iter()
                .fold(String::new(), |mut str, l| {
                    let selected =
                        if l.code == self.lang { "selected" } else { "" };
                    let _ = write!(
                        str,
                        r#"<option value="{code}" {selected}>{flag} {name}</option>"#,
                        code = l.code,
                        flag = l.flag,
                        name = l.name
                    );
                    str
                });
        format!(
            r#"
            <form hx-post="/language" hx-trigger="change" hx-swap="none">
                <select name="lang" aria-label="{label}">
                    {options}
                </select>
            </form>
            "#,
            label = t(self.lang, "language")
        )
    }
}

pub struct Welcome {
    pub lang: &'static str,
}
impl Component for Welcome {
    fn render(&self) -> String {
        let lang = self.lang;
        format!(
            r#"
            <div class="welcome">
                <h1>{app_name}</h1>
                <p>{tagline}</p>
                <div>
                    <a href="/authentication/login"><button class="primary">{login}</button></a>
                    <a href="/authentication/register"><button>{register}</button></a>
                </div>
                {language_selector}
            </div>
            "#,
            app_name = t(lang, "appName"),
            tagline = t(lang, "welcomeTagline"),
            login = t(lang, "login"),
            register = t(lang, "register"),
            language_selector = LanguageSelector { lang }.render()
        )
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    Register,
}

pub struct AuthForm {
    pub lang: &'static str,
    pub mode: AuthMode,
    pub error: Option<String>,
    pub notice: Option<String>,
}
impl Component for AuthForm {
    fn render(&self) -> String {
        let lang = self.lang;
        let banner = match (&self.error, &self.notice) {
            (Some(message), _) => format!(
                r#"<div class="banner error">{}</div>"#,
                clean(message)
            ),
            (None, Some(message)) => format!(
                r#"<div class="banner notice">{}</div>"#,
                clean(message)
            ),
            (None, None) => "".to_string(),
        };
        let (action, submit_label, username_field, alternate) = match self.mode
        {
            AuthMode::Login => (
                "/authentication/login",
                t(lang, "login"),
                "".to_string(),
                format!(
                    r#"<a href="/authentication/register">{}</a>"#,
                    t(lang, "register")
                ),
            ),
            AuthMode::Register => (
                "/authentication/register",
                t(lang, "register"),
                format!(
                    r#"
                    <label for="username">{username}</label>
                    <input type="text" name="username" id="username" required />
                    "#,
                    username = t(lang, "username")
                ),
                format!(
                    r#"<a href="/authentication/login">{}</a>"#,
                    t(lang, "login")
                ),
            ),
        };
        format!(
            r#"
            <form class="auth-card" method="POST" action="{action}">
                <h1>{app_name}</h1>
                {banner}
                {username_field}
                <label for="email">{email}</label>
                <input type="text" name="email" id="email" required />
                <label for="password">{password}</label>
                <input type="password" name="password" id="password" required />
                <button class="primary">{submit_label}</button>
                {alternate}
            </form>
            "#,
            app_name = t(lang, "appName"),
            email = t(lang, "email"),
            password = t(lang, "password"),
        )
    }
}

pub struct Topbar<'a> {
    pub lang: &'static str,
    pub user: &'a User,
    pub selected_folder: Option<Uuid>,
    pub search: &'a str,
}
impl Component for Topbar<'_> {
    fn render(&self) -> String {
        let lang = self.lang;
        let folder_field = if let Some(folder) = self.selected_folder {
            format!(r#"<input type="hidden" name="folder" value="{folder}" />"#)
        } else {
            "".to_string()
        };
        let admin_link = if self.user.role == Role::Admin {
            format!(r#"<a href="/admin">{}</a>"#, t(lang, "admin"))
        } else {
            "".to_string()
        };
        format!(
            r##"
            <header class="topbar">
                <h1><a href="/">{app_name}</a></h1>
                <form>
                    {folder_field}
                    <input
                        type="search"
                        name="search"
                        value="{search}"
                        placeholder="{search_label}"
                        hx-get="/notes"
                        hx-trigger="input changed delay:{search_debounce}ms"
                        hx-include="closest form"
                        hx-target="#note-grid"
                        hx-swap="outerHTML"
                    />
                </form>
                {admin_link}
                {language_selector}
                <form method="POST" action="/authentication/logout">
                    <button>{logout}</button>
                </form>
            </header>
            "##,
            app_name = t(lang, "appName"),
            search = clean_attr(self.search),
            search_label = t(lang, "search"),
            search_debounce = config::SEARCH_DEBOUNCE_MS,
            language_selector = LanguageSelector { lang }.render(),
            logout = t(lang, "logout"),
        )
    }
}

pub struct Sidebar<'a> {
    pub lang: &'static str,
    pub folders: &'a [Folder],
    pub selected_folder: Option<Uuid>,
}
impl Component for Sidebar<'_> {
    fn render(&self) -> String {
        let lang = self.lang;
        let all_selected = if self.selected_folder.is_none() {
            "selected"
        } else {
            ""
        };
        let folder_items =
            self.folders.iter().fold(String::new(), |mut str, folder| {
                let selected = if self.selected_folder == Some(folder.id) {
                    "selected"
                } else {
                    ""
                };
                let _ = write!(
                    str,
                    r#"
                    <li>
                        <a class="{selected}" href="/?folder={id}">
                            <span class="swatch" style="background-color: {color}"></span>
                            {name}
                        </a>
                    </li>
                    "#,
                    id = folder.id,
                    color = clean(&folder.color),
                    name = clean(&folder.name)
                );
                str
            });
        format!(
            r#"
            <aside class="sidebar">
                <h2>{folders_heading}</h2>
                <ul>
                    <li><a class="{all_selected}" href="/">{all_notes}</a></li>
                    {folder_items}
                </ul>
                <form hx-post="/folder" hx-swap="none">
                    <input type="text" name="name" placeholder="{create_folder}" required />
                    <button>+</button>
                </form>
            </aside>
            "#,
            folders_heading = t(lang, "folders"),
            all_notes = t(lang, "allNotes"),
            create_folder = t(lang, "createFolder"),
        )
    }
}

pub struct Home<'a> {
    pub lang: &'static str,
    pub user: &'a User,
    pub folders: &'a [Folder],
    pub selected_folder: Option<Uuid>,
    pub search: &'a str,
}
impl Component for Home<'_> {
    fn render(&self) -> String {
        let lang = self.lang;
        let create_form = if self.folders.is_empty() {
            format!("<p>{}</p>", t(lang, "createNotePrompt"))
        } else {
            let options = self.folders.iter().fold(
                String::new(),
                |mut str, folder| {
                    let selected = if self.selected_folder == Some(folder.id)
                    {
                        "selected"
                    } else {
                        ""
                    };
                    let _ = write!(
                        str,
                        r#"<option value="{id}" {selected}>{name}</option>"#,
                        id = folder.id,
                        name = clean(&folder.name)
                    );
                    str
                },
            );
            format!(
                r#"
                <form hx-post="/note">
                    <input type="text" name="title" placeholder="{untitled}" />
                    <select name="folder">{options}</select>
                    <button class="primary">{create_note}</button>
                </form>
                "#,
                untitled = t(lang, "untitledNote"),
                create_note = t(lang, "createNote"),
            )
        };
        format!(
            r#"
            {topbar}
            <div class="layout">
                {sidebar}
                <main class="content">
                    {create_form}
                    <div
                        id="note-grid"
                        hx-get="{notes_url}"
                        hx-trigger="load, reload-notes from:body"
                    >
                        {loading}
                    </div>
                </main>
            </div>
            "#,
            topbar = Topbar {
                lang,
                user: self.user,
                selected_folder: self.selected_folder,
                search: self.search,
            }
            .render(),
            sidebar = Sidebar {
                lang,
                folders: self.folders,
                selected_folder: self.selected_folder,
            }
            .render(),
            notes_url = notes_url(self.selected_folder, self.search),
            loading = t(lang, "notes"),
        )
    }
}

pub struct NoteCard<'a> {
    pub lang: &'static str,
    pub note: &'a Note,
    pub folder: Option<&'a Folder>,
}
impl Component for NoteCard<'_> {
    fn render(&self) -> String {
        let lang = self.lang;
        let note = self.note;
        let id = note.id;
        let title = if note.title.is_empty() {
            t(lang, "untitledNote").to_string()
        } else {
            clean(&note.title)
        };
        let preview: String =
            note.content.chars().take(config::NOTE_PREVIEW_CHARS).collect();
        let folder_chip = if let Some(folder) = self.folder {
            format!(
                r#"
                <span class="chip">
                    <span class="swatch" style="background-color: {color}"></span>
                    {name}
                </span>
                "#,
                color = clean(&folder.color),
                name = clean(&folder.name)
            )
        } else {
            "".to_string()
        };
        let pin_label = if note.pinned {
            t(lang, "unpin")
        } else {
            t(lang, "pin")
        };
        format!(
            r#"
            <div class="note-card">
                <h3><a href="/note/{id}">{title}</a></h3>
                <p class="preview">{preview}</p>
                <div class="meta">
                    {folder_chip}
                    <span>{updated_at}</span>
                </div>
                <div class="meta">
                    <button hx-post="/note/{id}/pin" hx-swap="none">{pin_label}</button>
                    <button class="danger" hx-delete="/note/{id}" hx-swap="none">{delete}</button>
                </div>
            </div>
            "#,
            preview = clean(&preview),
            updated_at = note.updated_at.format("%Y-%m-%d %H:%M"),
            delete = t(lang, "delete"),
        )
    }
}

pub struct NoteGrid<'a> {
    pub lang: &'static str,
    pub pinned: &'a [Note],
    pub unpinned: &'a [Note],
    pub folders: &'a [Folder],
    pub selected_folder: Option<Uuid>,
    pub search: &'a str,
}

impl NoteGrid<'_> {
    fn cards(&self, notes: &[Note]) -> String {
        notes.iter().fold(String::new(), |mut str, note| {
            let folder =
                self.folders.iter().find(|f| f.id == note.folder_id);
            let _ = write!(
                str,
                "{}",
                NoteCard {
                    lang: self.lang,
                    note,
                    folder,
                }
                .render()
            );
            str
        })
    }
}

impl Component for NoteGrid<'_> {
    fn render(&self) -> String {
        let lang = self.lang;
        let pinned_section = if self.pinned.is_empty() {
            "".to_string()
        } else {
            format!(
                r#"
                <h2 class="section-heading">{pinned_heading}</h2>
                <div class="note-grid">{cards}</div>
                "#,
                pinned_heading = t(lang, "pinned"),
                cards = self.cards(self.pinned)
            )
        };
        let heading = match self.selected_folder {
            Some(folder_id) => self
                .folders
                .iter()
                .find(|f| f.id == folder_id)
                .map(|f| clean(&f.name).to_uppercase())
                .unwrap_or_else(|| t(lang, "allNotes").to_string()),
            None => t(lang, "allNotes").to_string(),
        };
        let unpinned_section = if self.unpinned.is_empty() {
            let prompt = if self.selected_folder.is_some() {
                t(lang, "noNotesInFolder")
            } else {
                t(lang, "noNotes")
            };
            format!(r#"<div class="empty-state"><p>{prompt}</p></div>"#)
        } else {
            format!(
                r#"<div class="note-grid">{cards}</div>"#,
                cards = self.cards(self.unpinned)
            )
        };
        format!(
            r#"
            <div
                id="note-grid"
                hx-get="{notes_url}"
                hx-trigger="reload-notes from:body"
            >
                {pinned_section}
                <h2 class="section-heading">{heading}</h2>
                {unpinned_section}
            </div>
            "#,
            notes_url = notes_url(self.selected_folder, self.search),
        )
    }
}

pub struct SavedIndicator {
    pub lang: &'static str,
    pub saved_at: DateTime<Utc>,
}
impl Component for SavedIndicator {
    fn render(&self) -> String {
        format!(
            r#"<span id="saved-indicator" class="saved-indicator">{saved} {time}</span>"#,
            saved = t(self.lang, "saved"),
            time = self.saved_at.format("%H:%M:%S")
        )
    }
}

pub struct NoteEditor<'a> {
    pub lang: &'static str,
    pub note: &'a Note,
    pub folders: &'a [Folder],
}
impl Component for NoteEditor<'_> {
    fn render(&self) -> String {
        let lang = self.lang;
        let note = self.note;
        let id = note.id;
        let folder_options =
            self.folders.iter().fold(String::new(), |mut str, folder| {
                let selected = if folder.id == note.folder_id {
                    "selected"
                } else {
                    ""
                };
                let _ = write!(
                    str,
                    r#"<option value="{id}" {selected}>{name}</option>"#,
                    id = folder.id,
                    name = clean(&folder.name)
                );
                str
            });
        let rendered = markdown::to_html(&note.content);
        let preview = clean(&rendered);
        format!(
            r##"
            <a href="/">{back}</a>
            <form
                class="editor"
                hx-post="/note/{id}"
                hx-trigger="input changed delay:{debounce}ms, change"
                hx-target="#saved-indicator"
                hx-swap="outerHTML"
            >
                <input type="text" name="title" value="{title}" placeholder="{untitled}" />
                <select name="folder">{folder_options}</select>
                <textarea name="content" placeholder="{start_writing}">{content}</textarea>
                <div class="meta">
                    <button class="primary">{save}</button>
                    <button
                        class="danger"
                        type="button"
                        hx-delete="/note/{id}?from=editor"
                        hx-swap="none"
                    >{delete}</button>
                    <span id="saved-indicator" class="saved-indicator htmx-indicator">...</span>
                </div>
            </form>
            <div class="preview-pane">{preview}</div>
            "##,
            back = t(lang, "back"),
            debounce = config::AUTOSAVE_DEBOUNCE_MS,
            title = clean_attr(&note.title),
            untitled = t(lang, "untitledNote"),
            start_writing = t(lang, "startWriting"),
            content = clean(&note.content),
            save = t(lang, "save"),
            delete = t(lang, "delete"),
        )
    }
}

/// The editor's dedicated empty view for a note id that does not (or no
/// longer does) exist. Rendered with a 200; this is a screen, not an error.
pub struct NoteNotFound {
    pub lang: &'static str,
}
impl Component for NoteNotFound {
    fn render(&self) -> String {
        format!(
            r#"
            <div class="empty-state">
                <h1>{message}</h1>
                <a href="/">{back}</a>
            </div>
            "#,
            message = t(self.lang, "noteNotFound"),
            back = t(self.lang, "back"),
        )
    }
}

pub struct NotFound {
    pub lang: &'static str,
}
impl Component for NotFound {
    fn render(&self) -> String {
        format!(
            r#"
            <div class="empty-state">
                <h1>404</h1>
                <p>{message}</p>
                <a href="/">{back}</a>
            </div>
            "#,
            message = t(self.lang, "pageNotFound"),
            back = t(self.lang, "back"),
        )
    }
}

pub struct AdminPanel<'a> {
    pub lang: &'static str,
    pub user_count: i64,
    pub note_count: i64,
    pub folder_count: i64,
    pub users: &'a [User],
}
impl Component for AdminPanel<'_> {
    fn render(&self) -> String {
        let lang = self.lang;
        let rows = self.users.iter().fold(String::new(), |mut str, user| {
            let _ = write!(
                str,
                r#"
                <tr>
                    <td>{username}</td>
                    <td>{email}</td>
                    <td>{role}</td>
                    <td>{created_at}</td>
                </tr>
                "#,
                username = clean(&user.username),
                email = clean(&user.email),
                role = user.role.as_str(),
                created_at = user.created_at.format("%Y-%m-%d"),
            );
            str
        });
        format!(
            r#"
            <main class="content">
                <a href="/">{back}</a>
                <h1>{heading}</h1>
                <div class="stat-grid">
                    <div class="stat"><div class="value">{user_count}</div>{users_label}</div>
                    <div class="stat"><div class="value">{note_count}</div>{notes_label}</div>
                    <div class="stat"><div class="value">{folder_count}</div>{folders_label}</div>
                </div>
                <table class="admin">
                    <tr>
                        <th>{username_label}</th>
                        <th>{email_label}</th>
                        <th>Role</th>
                        <th>Created</th>
                    </tr>
                    {rows}
                </table>
            </main>
            "#,
            back = t(lang, "back"),
            heading = t(lang, "admin"),
            user_count = self.user_count,
            users_label = t(lang, "username"),
            note_count = self.note_count,
            notes_label = t(lang, "notes"),
            folder_count = self.folder_count,
            folders_label = t(lang, "folders"),
            username_label = t(lang, "username"),
            email_label = t(lang, "email"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        Note::create(Uuid::new_v4(), "Groceries", Uuid::new_v4())
    }

    #[test]
    fn test_notes_url() {
        assert_eq!(notes_url(None, ""), "/notes");
        let folder = Uuid::nil();
        assert_eq!(
            notes_url(Some(folder), ""),
            format!("/notes?folder={folder}")
        );
        assert_eq!(
            notes_url(Some(folder), "a b&c"),
            format!("/notes?folder={folder}&search=a%20b%26c")
        );
        assert_eq!(notes_url(None, "milk"), "/notes?search=milk");
    }

    #[test]
    fn test_note_card_escapes_markup() {
        let mut note = sample_note();
        note.title = "<script>alert(1)</script>hello".to_string();
        let html = NoteCard {
            lang: "en",
            note: &note,
            folder: None,
        }
        .render();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_empty_title_renders_untitled() {
        let mut note = sample_note();
        note.title = "".to_string();
        let html = NoteCard {
            lang: "en",
            note: &note,
            folder: None,
        }
        .render();
        assert!(html.contains("Untitled Note"));
    }

    #[test]
    fn test_note_grid_shows_folder_empty_state() {
        let folder = Uuid::new_v4();
        let html = NoteGrid {
            lang: "en",
            pinned: &[],
            unpinned: &[],
            folders: &[],
            selected_folder: Some(folder),
            search: "",
        }
        .render();
        assert!(html.contains("There are no notes in this folder yet."));
    }

    #[test]
    fn test_note_grid_pinned_section_only_when_pinned_exist() {
        let note = sample_note();
        let without = NoteGrid {
            lang: "en",
            pinned: &[],
            unpinned: std::slice::from_ref(&note),
            folders: &[],
            selected_folder: None,
            search: "",
        }
        .render();
        assert!(!without.contains("PINNED"));

        let mut pinned = sample_note();
        pinned.pinned = true;
        let with = NoteGrid {
            lang: "en",
            pinned: std::slice::from_ref(&pinned),
            unpinned: std::slice::from_ref(&note),
            folders: &[],
            selected_folder: None,
            search: "",
        }
        .render();
        assert!(with.contains("PINNED"));
    }

    #[test]
    fn test_editor_carries_autosave_trigger() {
        let note = sample_note();
        let html = NoteEditor {
            lang: "en",
            note: &note,
            folders: &[],
        }
        .render();
        assert!(html.contains(&format!(
            "delay:{}ms",
            config::AUTOSAVE_DEBOUNCE_MS
        )));
        assert!(html.contains(&format!("hx-post=\"/note/{}\"", note.id)));
        assert!(html.contains(r##"hx-target="#saved-indicator""##));
    }

    #[test]
    fn test_editor_title_cannot_break_out_of_attribute() {
        let mut note = sample_note();
        note.title = r#"x" autofocus onfocus="alert(1)"#.to_string();
        let html = NoteEditor {
            lang: "en",
            note: &note,
            folders: &[],
        }
        .render();
        // a raw quote in the title must not close the value attribute
        assert!(!html.contains(r#"value="x" autofocus"#));
        assert!(html.contains(r#"value="x&quot; autofocus"#));
    }

    #[test]
    fn test_search_term_cannot_break_out_of_attribute() {
        let user = User {
            id: Uuid::new_v4(),
            username: "u".into(),
            email: "u@example.com".into(),
            role: Role::User,
            created_at: Utc::now(),
        };
        let html = Topbar {
            lang: "en",
            user: &user,
            selected_folder: None,
            search: r#"milk" onmouseover="alert(1)"#,
        }
        .render();
        assert!(!html.contains(r#"" onmouseover"#));
        assert!(html.contains(r##"hx-target="#note-grid""##));
    }

    #[test]
    fn test_localized_page_chrome() {
        let user = User {
            id: Uuid::new_v4(),
            username: "u".into(),
            email: "u@example.com".into(),
            role: Role::User,
            created_at: Utc::now(),
        };
        let html = Home {
            lang: "de",
            user: &user,
            folders: &[],
            selected_folder: None,
            search: "",
        }
        .render();
        assert!(html.contains("ORDNER"));
        // regular users never see the admin link
        assert!(!html.contains(r#"href="/admin""#));
    }

    #[test]
    fn test_admin_link_for_admin_role() {
        let user = User {
            id: Uuid::new_v4(),
            username: "root".into(),
            email: "root@example.com".into(),
            role: Role::Admin,
            created_at: Utc::now(),
        };
        let html = Topbar {
            lang: "en",
            user: &user,
            selected_folder: None,
            search: "",
        }
        .render();
        assert!(html.contains(r#"href="/admin""#));
    }
}
