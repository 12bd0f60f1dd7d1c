//! DTOs (Data Transfer Objects)
//!
//! Form bodies in, plain page data out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{CreateEntryInput, LoginInput, RegisterInput};
use crate::domain::entity::entry::Entry;

// ============================================================================
// Forms
// ============================================================================

/// Register / login form
///
/// Missing fields read as empty and fail validation instead of the request.
#[derive(Clone, Default, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl From<CredentialsForm> for RegisterInput {
    fn from(form: CredentialsForm) -> Self {
        RegisterInput {
            user_name: form.username,
            password: form.password,
        }
    }
}

impl From<CredentialsForm> for LoginInput {
    fn from(form: CredentialsForm) -> Self {
        LoginInput {
            user_name: form.username,
            password: form.password,
        }
    }
}

/// New entry form. There is deliberately no owner field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl From<EntryForm> for CreateEntryInput {
    fn from(form: EntryForm) -> Self {
        CreateEntryInput {
            title: form.title,
            body: form.body,
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPage {
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl From<Entry> for EntryView {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.get(),
            created_at: entry.created_at,
            user_id: entry.user_id.get(),
            title: entry.title,
            body: entry.body,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesPage {
    pub entries: Vec<EntryView>,
}
