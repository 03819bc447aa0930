use sqlx::PgPool;

use crate::modules::auth::model::{UserRole, normalize_email};
use crate::utils::password::hash_password;

/// Seeds a superuser account. Registration only creates default-role
/// users, so the first privileged account has to come from the command
/// line.
pub async fn create_super_user(
    db: &PgPool,
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = normalize_email(email);
    let password_hash =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let roles = vec![
        UserRole::SuperUser.as_str().to_string(),
        UserRole::User.as_str().to_string(),
    ];

    let inserted = sqlx::query(
        "INSERT INTO users (email, password, full_name, roles)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(&email)
    .bind(&password_hash)
    .bind(full_name)
    .bind(&roles)
    .execute(db)
    .await?;

    if inserted.rows_affected() == 0 {
        return Err(format!("A user with email {email} already exists").into());
    }

    Ok(())
}
