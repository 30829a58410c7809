use super::models::{Folder, Note, Role, User};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPool, FromRow};
use uuid::Uuid;

/// Generic CRUD surface for our persistent record types. Rows are decoded
/// into typed structs at this boundary; a malformed row is an `Err`, never
/// an untyped value escaping upward.
#[async_trait]
pub trait DbModel<GetQuery, ListQuery>: Send + Sync {
    /// `Ok(None)` means the row does not exist, which callers typically
    /// render as a not-found view. Transport and decode failures are `Err`.
    async fn get(db: &PgPool, query: &GetQuery) -> Result<Option<Self>>
    where
        Self: Sized;
    async fn list(db: &PgPool, query: &ListQuery) -> Result<Vec<Self>>
    where
        Self: Sized;
    /// Upsert by primary key.
    async fn save(&self, db: &PgPool) -> Result<()>;
    async fn delete(self, db: &PgPool) -> Result<()>;
}

/// Note and folder queries are always scoped by the owning user; one user
/// can never address another user's rows.
pub struct GetNoteQuery {
    pub user_id: Uuid,
    pub id: Uuid,
}

pub struct ListNoteQuery {
    pub user_id: Uuid,
}

#[derive(FromRow)]
struct NoteRow {
    id: Uuid,
    user_id: Uuid,
    folder_id: Uuid,
    title: String,
    content: String,
    pinned: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: row.id,
            user_id: row.user_id,
            folder_id: row.folder_id,
            title: row.title,
            content: row.content,
            pinned: row.pinned,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl DbModel<GetNoteQuery, ListNoteQuery> for Note {
    async fn get(db: &PgPool, query: &GetNoteQuery) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, NoteRow>(
            "select id, user_id, folder_id, title, content, pinned,
                created_at, updated_at
            from notes
            where user_id = $1 and id = $2",
        )
        .bind(query.user_id)
        .bind(query.id)
        .fetch_optional(db)
        .await?;

        Ok(row.map(Note::from))
    }

    async fn list(db: &PgPool, query: &ListNoteQuery) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            "select id, user_id, folder_id, title, content, pinned,
                created_at, updated_at
            from notes
            where user_id = $1
            order by updated_at desc",
        )
        .bind(query.user_id)
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn save(&self, db: &PgPool) -> Result<()> {
        sqlx::query(
            "insert into notes
                (id, user_id, folder_id, title, content, pinned,
                created_at, updated_at)
            values ($1, $2, $3, $4, $5, $6, $7, $8)
            on conflict (id) do update set
                folder_id = $3,
                title = $4,
                content = $5,
                pinned = $6,
                updated_at = $8",
        )
        .bind(self.id)
        .bind(self.user_id)
        .bind(self.folder_id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(self.pinned)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(db)
        .await?;

        Ok(())
    }

    async fn delete(self, db: &PgPool) -> Result<()> {
        sqlx::query("delete from notes where user_id = $1 and id = $2")
            .bind(self.user_id)
            .bind(self.id)
            .execute(db)
            .await?;

        Ok(())
    }
}

pub struct GetFolderQuery {
    pub user_id: Uuid,
    pub id: Uuid,
}

pub struct ListFolderQuery {
    pub user_id: Uuid,
}

#[derive(FromRow)]
struct FolderRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    color: String,
}

impl From<FolderRow> for Folder {
    fn from(row: FolderRow) -> Self {
        Folder {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            color: row.color,
        }
    }
}

#[async_trait]
impl DbModel<GetFolderQuery, ListFolderQuery> for Folder {
    async fn get(db: &PgPool, query: &GetFolderQuery) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, FolderRow>(
            "select id, user_id, name, color
            from folders
            where user_id = $1 and id = $2",
        )
        .bind(query.user_id)
        .bind(query.id)
        .fetch_optional(db)
        .await?;

        Ok(row.map(Folder::from))
    }

    async fn list(db: &PgPool, query: &ListFolderQuery) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, FolderRow>(
            "select id, user_id, name, color
            from folders
            where user_id = $1
            order by name",
        )
        .bind(query.user_id)
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(Folder::from).collect())
    }

    async fn save(&self, db: &PgPool) -> Result<()> {
        sqlx::query(
            "insert into folders (id, user_id, name, color)
            values ($1, $2, $3, $4)
            on conflict (id) do update set name = $3, color = $4",
        )
        .bind(self.id)
        .bind(self.user_id)
        .bind(&self.name)
        .bind(&self.color)
        .execute(db)
        .await?;

        Ok(())
    }

    async fn delete(self, db: &PgPool) -> Result<()> {
        // Notes referencing this folder are left dangling on purpose; they
        // remain reachable from the all-notes view.
        sqlx::query("delete from folders where user_id = $1 and id = $2")
            .bind(self.user_id)
            .bind(self.id)
            .execute(db)
            .await?;

        Ok(())
    }
}

pub struct GetUserQuery {
    /// Username or email
    pub identifier: String,
}

pub struct ListUserQuery {}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
            role: Role::from_str(&row.role),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl DbModel<GetUserQuery, ListUserQuery> for User {
    async fn get(db: &PgPool, query: &GetUserQuery) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, UserRow>(
            "select id, username, email, role, created_at
            from users
            where username = $1 or email = $1",
        )
        .bind(&query.identifier)
        .fetch_optional(db)
        .await?;

        Ok(row.map(User::from))
    }

    async fn list(db: &PgPool, _query: &ListUserQuery) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "select id, username, email, role, created_at
            from users
            order by created_at",
        )
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn save(&self, db: &PgPool) -> Result<()> {
        sqlx::query(
            "update users set username = $2, email = $3, role = $4
            where id = $1",
        )
        .bind(self.id)
        .bind(&self.username)
        .bind(&self.email)
        .bind(self.role.as_str())
        .execute(db)
        .await?;

        Ok(())
    }

    async fn delete(self, db: &PgPool) -> Result<()> {
        sqlx::query("delete from users where id = $1")
            .bind(self.id)
            .execute(db)
            .await?;

        Ok(())
    }
}

pub async fn create_user(
    db: &PgPool,
    username: &str,
    email: &str,
    hashed_pw: &super::pw::HashedPw,
) -> Result<User> {
    let user = User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: email.to_string(),
        role: Role::User,
        created_at: Utc::now(),
    };
    sqlx::query(
        "insert into users (id, username, email, role, salt, digest,
            created_at)
        values ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.email)
    .bind(user.role.as_str())
    .bind(&hashed_pw.salt)
    .bind(&hashed_pw.digest)
    .bind(user.created_at)
    .execute(db)
    .await?;

    Ok(user)
}

#[derive(FromRow)]
struct CountRow {
    count: i64,
}

async fn count_rows(db: &PgPool, table: &'static str) -> Result<i64> {
    // `table` is one of our three literals below, never user input.
    let row = sqlx::query_as::<_, CountRow>(&format!(
        "select count(*) as count from {table}"
    ))
    .fetch_one(db)
    .await?;

    Ok(row.count)
}

pub async fn count_users(db: &PgPool) -> Result<i64> {
    count_rows(db, "users").await
}

pub async fn count_notes(db: &PgPool) -> Result<i64> {
    count_rows(db, "notes").await
}

pub async fn count_folders(db: &PgPool) -> Result<i64> {
    count_rows(db, "folders").await
}
