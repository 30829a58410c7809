use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
    /// Unknown role strings degrade to the least privileged role rather
    /// than failing the row decode.
    pub fn from_str(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Soft reference; may dangle if the folder is deleted out from under
    /// the note, in which case the note still shows under "all notes."
    pub folder_id: Uuid,
    pub title: String,
    pub content: String,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn create(user_id: Uuid, title: &str, folder_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            folder_id,
            title: title.to_string(),
            content: "".to_string(),
            pinned: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an editor patch. Any field edit refreshes `updated_at`.
    pub fn apply(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(folder_id) = patch.folder_id {
            self.folder_id = folder_id;
        }
        self.updated_at = Utc::now();
    }

    pub fn toggle_pinned(&mut self) {
        self.pinned = !self.pinned;
        self.updated_at = Utc::now();
    }
}

/// Field patch for [Note::apply]; `None` means "leave alone."
#[derive(Clone, Debug, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<Uuid>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Folder {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub color: String,
}

impl Folder {
    pub fn create(user_id: Uuid, name: &str, color: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            color: color.unwrap_or_else(random_color),
        }
    }
}

fn random_color() -> String {
    let bytes = Uuid::new_v4().into_bytes();
    format!("#{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2])
}

// Derived display views. Each screen is a linear scan over the full
// in-memory note list; nothing here touches the database.

pub fn filter_by_folder(mut notes: Vec<Note>, folder_id: Uuid) -> Vec<Note> {
    notes.retain(|n| n.folder_id == folder_id);
    notes
}

/// Case-insensitive substring match on title or content.
pub fn filter_by_search(mut notes: Vec<Note>, term: &str) -> Vec<Note> {
    let term = term.to_lowercase();
    notes.retain(|n| {
        n.title.to_lowercase().contains(&term)
            || n.content.to_lowercase().contains(&term)
    });
    notes
}

/// Split into (pinned, unpinned), preserving relative order.
pub fn partition_pinned(notes: Vec<Note>) -> (Vec<Note>, Vec<Note>) {
    notes.into_iter().partition(|n| n.pinned)
}

pub fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

/// Pinned notes keep creation order (newest first) so that editing one does
/// not shuffle the pinned section around under the user.
pub fn sort_newest_created_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn note(title: &str, folder_id: Uuid, pinned: bool) -> Note {
        let mut n = Note::create(Uuid::new_v4(), title, folder_id);
        n.pinned = pinned;
        n
    }

    #[test]
    fn test_apply_patch_updates_title_and_timestamp() {
        let mut n = note("old", Uuid::new_v4(), false);
        let before = n.updated_at;
        n.apply(NotePatch {
            title: Some("X".to_string()),
            ..Default::default()
        });
        assert_eq!(n.title, "X");
        assert_eq!(n.content, "");
        assert!(n.updated_at >= before);
    }

    #[test]
    fn test_toggle_pinned_is_an_involution() {
        let mut n = note("n", Uuid::new_v4(), false);
        n.toggle_pinned();
        assert!(n.pinned);
        n.toggle_pinned();
        assert!(!n.pinned);
    }

    #[test]
    fn test_filter_by_folder() {
        let personal = Uuid::new_v4();
        let work = Uuid::new_v4();
        let notes = vec![
            note("groceries", personal, false),
            note("standup", work, false),
            note("gym", personal, false),
        ];
        let result = filter_by_folder(notes, personal);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|n| n.folder_id == personal));
    }

    #[test]
    fn test_filter_by_search_is_case_insensitive() {
        let f = Uuid::new_v4();
        let mut hit = note("Groceries", f, false);
        hit.content = "buy MILK".to_string();
        let notes = vec![hit, note("unrelated", f, false)];

        let by_title = filter_by_search(notes.clone(), "groc");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Groceries");

        let by_content = filter_by_search(notes, "milk");
        assert_eq!(by_content.len(), 1);
    }

    #[test]
    fn test_partition_pinned() {
        let f = Uuid::new_v4();
        let notes = vec![
            note("a", f, true),
            note("b", f, false),
            note("c", f, true),
        ];
        let (pinned, unpinned) = partition_pinned(notes);
        assert_eq!(pinned.len(), 2);
        assert_eq!(unpinned.len(), 1);
        // relative order among the pinned notes is untouched
        assert_eq!(pinned[0].title, "a");
        assert_eq!(pinned[1].title, "c");
    }

    #[test]
    fn test_sort_newest_first() {
        let f = Uuid::new_v4();
        let mut old = note("old", f, false);
        old.updated_at = Utc::now() - Duration::hours(2);
        let fresh = note("fresh", f, false);
        let mut notes = vec![old, fresh];
        sort_newest_first(&mut notes);
        for pair in notes.windows(2) {
            assert!(pair[0].updated_at >= pair[1].updated_at);
        }
        assert_eq!(notes[0].title, "fresh");
    }

    #[test]
    fn test_created_note_sorts_to_the_top_of_its_folder() {
        let personal = Uuid::new_v4();
        let work = Uuid::new_v4();
        let mut standup = note("standup", work, false);
        standup.updated_at = Utc::now() - Duration::minutes(5);
        let mut errands = note("errands", personal, false);
        errands.updated_at = Utc::now() - Duration::minutes(1);
        let groceries = Note::create(Uuid::new_v4(), "Groceries", personal);

        let all = vec![standup, errands, groceries];
        let mut in_personal = filter_by_folder(all.clone(), personal);
        sort_newest_first(&mut in_personal);
        assert_eq!(in_personal[0].title, "Groceries");

        let in_work = filter_by_folder(all, work);
        assert!(in_work.iter().all(|n| n.title != "Groceries"));
    }

    #[test]
    fn test_pinned_order_survives_an_update() {
        let f = Uuid::new_v4();
        let mut first = note("first", f, true);
        first.created_at = Utc::now() - Duration::hours(1);
        first.updated_at = first.created_at;
        let second = note("second", f, true);

        let mut notes = vec![second.clone(), first.clone()];
        notes[1].apply(NotePatch {
            title: Some("first, edited".to_string()),
            ..Default::default()
        });

        let (mut pinned, _) = partition_pinned(notes);
        sort_newest_created_first(&mut pinned);
        assert_eq!(pinned.len(), 2);
        assert_eq!(pinned[0].title, "second");
        assert_eq!(pinned[1].title, "first, edited");
    }

    #[test]
    fn test_random_color_is_hex() {
        let c = random_color();
        assert_eq!(c.len(), 7);
        assert!(c.starts_with('#'));
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}
