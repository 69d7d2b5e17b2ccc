//! Student parent records.
//!
//! Only `name` is assignable from a request; timestamps are owned by the store
//! and serialize as `dd-mm-yyyy`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use schoolbook_core::serde::{
    deserialize_trimmed, deserialize_trimmed_keep_empty, serialize_day_month_year,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct StuParent {
    pub id: Uuid,
    pub name: String,
    #[serde(serialize_with = "serialize_day_month_year")]
    #[schema(value_type = String, example = "07-03-2024")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_day_month_year")]
    #[schema(value_type = String, example = "07-03-2024")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateStuParentRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    #[validate(
        required(message = "The name field is required."),
        length(
            min = 1,
            max = 255,
            message = "The name field must be between 1 and 255 characters."
        )
    )]
    #[schema(example = "Ada Obi")]
    pub name: Option<String>,
}

/// Absent fields are left unchanged. A blank name is kept so it fails the
/// length rule instead of turning into a no-op.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStuParentRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_keep_empty")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "The name field must be between 1 and 255 characters."
    ))]
    #[schema(example = "Ada Obi")]
    pub name: Option<String>,
}

impl UpdateStuParentRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
