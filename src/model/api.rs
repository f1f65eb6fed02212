use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ServiceInfoDto {
    pub name: String,
    pub version: String,
    pub openapi: String,
    pub authentication: String,
}
