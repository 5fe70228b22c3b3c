use planner_core::{
    errors::{PlannerResult, ValidationErrors, Violation},
    models::user::{CreateUserRequest, UpdateUserRequest, User},
    scope::Actor,
    settings::PolicySettings,
    update::FieldUpdates,
    validation,
};
use planner_db::repositories::UserRepository;
use uuid::Uuid;

use super::found;
use crate::middleware::auth;

/// Registers a new user; every problem with the request is reported at once.
pub async fn create_user<S>(
    store: &S,
    policy: &PolicySettings,
    request: &CreateUserRequest,
) -> PlannerResult<User>
where
    S: UserRepository + ?Sized,
{
    let mut errors = ValidationErrors::new();

    let login_taken = store.find_user_by_login(&request.login, None).await?;
    errors.check(
        login_taken.is_some(),
        Violation::already_exists("User", &request.login),
    );
    let url_taken = store
        .find_user_by_custom_url(&request.custom_url, None)
        .await?;
    errors.check(
        url_taken.is_some(),
        Violation::already_exists("URL", &request.custom_url),
    );

    errors.extend(validation::password(&request.password, policy));
    errors.extend(validation::allowed_characters(
        "Login",
        &request.login,
        policy.login_characters.as_deref(),
    ));
    errors.extend(validation::allowed_characters(
        "CustomURL",
        &request.custom_url,
        policy.custom_url_characters.as_deref(),
    ));
    errors.into_result()?;

    let password_hash = auth::hash_password(&request.password)?;
    let user = store.create_user(request, &password_hash).await?;
    tracing::info!("Registered user {}", user.id);

    Ok(user.into())
}

pub async fn get_user<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<User>
where
    S: UserRepository + ?Sized,
{
    let user = store.get_user(id, actor.scope()).await?;
    Ok(found(user, "User")?.into())
}

/// Supplied fields are checked like on registration, ignoring the user's own row.
pub async fn update_user<S>(
    store: &S,
    actor: Actor,
    policy: &PolicySettings,
    id: Uuid,
    request: &UpdateUserRequest,
) -> PlannerResult<User>
where
    S: UserRepository + ?Sized,
{
    let scope = actor.scope();
    found(store.get_user(id, scope).await?, "User")?;

    let mut errors = ValidationErrors::new();

    if let Some(login) = &request.login {
        errors.extend(validation::allowed_characters(
            "Login",
            login,
            policy.login_characters.as_deref(),
        ));
        let taken = store.find_user_by_login(login, Some(id)).await?;
        errors.check(taken.is_some(), Violation::already_exists("User", login));
    }

    if let Some(custom_url) = &request.custom_url {
        errors.extend(validation::allowed_characters(
            "CustomURL",
            custom_url,
            policy.custom_url_characters.as_deref(),
        ));
        let taken = store.find_user_by_custom_url(custom_url, Some(id)).await?;
        errors.check(taken.is_some(), Violation::already_exists("URL", custom_url));
    }

    errors.into_result()?;

    let updates = FieldUpdates::new()
        .set("login", request.login.clone())
        .set("custom_url", request.custom_url.clone());
    let user = store.update_user(id, &updates, scope).await?;

    Ok(found(user, "User")?.into())
}

pub async fn delete_user<S>(store: &S, actor: Actor, id: Uuid) -> PlannerResult<()>
where
    S: UserRepository + ?Sized,
{
    store.delete_user(id, actor.scope()).await?;
    Ok(())
}
