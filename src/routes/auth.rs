use crate::{
    auth::{
        hash_password, verify_password, AuthResponse, LoginRequest, RegisterRequest, TokenService,
    },
    error::AppError,
    store::UserStore,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new account and returns an account summary plus a bearer token.
/// The email is normalized before validation, the duplicate check, and the
/// insert, and a duplicate registers as a 409 conflict.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    tokens: web::Data<TokenService>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Normalize first so a padded or mixed-case address validates and
    // registers as its canonical form, then check the input shape.
    let register_data = register_data.into_inner().normalized();
    register_data.validate()?;

    if UserStore::find_by_email(&pool, &register_data.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let password_hash = hash_password(&register_data.password)?;

    // The unique index on email still backs this up against a concurrent
    // registration; that violation also maps to Conflict.
    let user = UserStore::create(
        &pool,
        register_data.f_name.trim(),
        register_data.l_name.trim(),
        &register_data.email,
        &password_hash,
    )
    .await?;

    let token = tokens.issue(user.id)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// Login user
///
/// Authenticates by email and password. An unknown email and a wrong
/// password produce the same generic 401 so callers cannot tell which
/// factor failed.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    tokens: web::Data<TokenService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let login_data = login_data.into_inner().normalized();
    login_data.validate()?;

    let user = match UserStore::find_by_email(&pool, &login_data.email).await? {
        Some(user) => user,
        None => return Err(AppError::Unauthorized("Invalid email or password".into())),
    };

    if !verify_password(&login_data.password, &user.password_hash)? {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    let token = tokens.issue(user.id)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: user.into(),
    }))
}
