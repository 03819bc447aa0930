use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::middleware::auth::AuthUser;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{
    AuthStatusResponse, CreateUserDto, LoginResult, LoginUserDto, User, normalize_email,
};

pub struct AuthService;

impl AuthService {
    /// Creates a user account. The email is normalized before the
    /// uniqueness check and the insert so both act on the canonical form;
    /// `is_active` and `roles` come from the column defaults.
    #[instrument(skip(db, dto))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let email = normalize_email(&dto.email);

        let email_taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(&email)
                .fetch_one(db)
                .await?;

        if email_taken {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already exists"
            )));
        }

        let password_hash = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password, full_name)
             VALUES ($1, $2, $3)
             RETURNING id, email, full_name, is_active, roles",
        )
        .bind(&email)
        .bind(&password_hash)
        .bind(&dto.full_name)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    /// Verifies credentials and signs an access token. Lookup uses the
    /// normalized email so login accepts the same spellings registration
    /// does. Wrong email and wrong password produce the same error.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginUserDto,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResult, AppError> {
        #[derive(sqlx::FromRow)]
        struct CredentialRow {
            id: Uuid,
            email: String,
            password: String,
            full_name: String,
            is_active: bool,
            roles: Vec<String>,
        }

        let stored = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, email, password, full_name, is_active, roles FROM users WHERE email = $1",
        )
        .bind(normalize_email(&dto.email))
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid email or password")))?;

        if !verify_password(&dto.password, &stored.password)? {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid email or password"
            )));
        }

        if !stored.is_active {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "User is inactive, talk with an admin"
            )));
        }

        let user = User {
            id: stored.id,
            email: stored.email,
            full_name: stored.full_name,
            is_active: stored.is_active,
            roles: stored.roles,
        };

        let token = create_access_token(user.id, &user.email, &user.roles, jwt_config)?;

        Ok(LoginResult { user, token })
    }

    /// Re-reads the principal from the database and signs a fresh token.
    /// Catches accounts deleted or deactivated since the current token
    /// was issued.
    #[instrument(skip(db, jwt_config))]
    pub async fn check_auth_status(
        db: &PgPool,
        auth_user: &AuthUser,
        jwt_config: &JwtConfig,
    ) -> Result<AuthStatusResponse, AppError> {
        let user_id = auth_user.user_id()?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, full_name, is_active, roles FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Token not valid")))?;

        if !user.is_active {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "User is inactive, talk with an admin"
            )));
        }

        let token = create_access_token(user.id, &user.email, &user.roles, jwt_config)?;

        Ok(AuthStatusResponse { user, token })
    }
}
