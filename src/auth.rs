use super::{db_ops, db_ops::DbModel, models, pw, session};
use anyhow::{bail, Result};
use sqlx::{postgres::PgPool, FromRow};

#[derive(FromRow)]
struct PwRow {
    salt: String,
    digest: String,
}

/// Check credentials and mint a session. Bad identifier and bad password
/// produce the same error so the two cases are indistinguishable to a
/// caller probing for accounts.
pub async fn authenticate(
    db: &PgPool,
    username_or_email: &str,
    password: &str,
) -> Result<session::Session> {
    let user = models::User::get(
        db,
        &db_ops::GetUserQuery {
            identifier: username_or_email.to_string(),
        },
    )
    .await?;
    let user = match user {
        Some(u) => u,
        None => bail!("bad credentials"),
    };
    let row = sqlx::query_as::<_, PwRow>(
        "select salt, digest from users where id = $1",
    )
    .bind(user.id)
    .fetch_one(db)
    .await?;
    let truth = pw::HashedPw {
        salt: row.salt,
        digest: row.digest,
    };

    if pw::check(password, &truth).is_ok() {
        Ok(session::Session::new(user))
    } else {
        bail!("bad credentials")
    }
}

/// Register a new user. The identifier must not collide with an existing
/// username or email.
pub async fn register(
    db: &PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> Result<models::User> {
    for identifier in [username, email] {
        let existing = models::User::get(
            db,
            &db_ops::GetUserQuery {
                identifier: identifier.to_string(),
            },
        )
        .await?;
        if existing.is_some() {
            bail!("user {identifier} already exists");
        }
    }
    let hashed = pw::hash_new(password);

    db_ops::create_user(db, username, email, &hashed).await
}
