//! User Endpoints

use web_sys::FormData;

use super::transport::{Body, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::{LoginCredentials, MessageResponse, Registration, UserProfile, UserResponse};

pub async fn me(transport: &Transport) -> ApiResult<UserProfile> {
    let response: UserResponse = transport.get("/user/me").await?;
    Ok(response.user)
}

pub async fn login(transport: &Transport, credentials: &LoginCredentials) -> ApiResult<Option<String>> {
    let response: MessageResponse = transport
        .send("POST", "/user/login", Body::json(credentials)?)
        .await?;
    Ok(response.message)
}

pub async fn register(transport: &Transport, registration: &Registration) -> ApiResult<Option<String>> {
    let form = registration_form(registration)?;
    let response: MessageResponse = transport
        .send("POST", "/user/register", Body::Form(&form))
        .await?;
    Ok(response.message)
}

pub async fn logout(transport: &Transport) -> ApiResult<Option<String>> {
    let response: MessageResponse = transport.get("/user/logout").await?;
    Ok(response.message)
}

fn registration_form(registration: &Registration) -> ApiResult<FormData> {
    let invalid = |_| ApiError::Validation("Could not prepare the registration form.".into());
    let form = FormData::new().map_err(invalid)?;
    form.append_with_str("name", &registration.name).map_err(invalid)?;
    form.append_with_str("email", &registration.email).map_err(invalid)?;
    form.append_with_str("phone", &registration.phone).map_err(invalid)?;
    form.append_with_str("password", &registration.password).map_err(invalid)?;
    if let Some(avatar) = &registration.avatar {
        form.append_with_blob_and_filename("avatar", avatar, &avatar.name())
            .map_err(invalid)?;
    }
    Ok(form)
}
