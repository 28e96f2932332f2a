/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{FIELD_AUTHENTICATE, FIELD_ID, FIELD_PASTE, FIELD_TITLE};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Remote procedures exposed by the paste API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMethod {
    /// Creates a new paste
    Create,
    /// Fetches a paste by id
    Get,
    /// Lists the pastes of the authenticated user
    List,
    /// Deletes a paste
    Delete,
    /// Edits the body and/or title of a paste
    Edit,
}

impl ApiMethod {
    /// Path segment of the method, as used in the endpoint URL
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMethod::Create => "create",
            ApiMethod::Get => "get",
            ApiMethod::List => "list",
            ApiMethod::Delete => "delete",
            ApiMethod::Edit => "edit",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format the API answers in; only affects the endpoint suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseFormat {
    /// `.json` endpoints
    #[default]
    Json,
    /// `.xml` endpoints
    Xml,
}

impl ResponseFormat {
    /// Endpoint suffix, without the dot
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ResponseFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "xml" => Ok(ResponseFormat::Xml),
            other => Err(AppError::InvalidInput(format!(
                "unknown response format '{other}', expected JSON or XML"
            ))),
        }
    }
}

/// URL-encoded form payload of a request
///
/// Fields keep their insertion order and, like an HTML form, the same name
/// may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PasteForm {
    fields: Vec<(String, String)>,
}

impl PasteForm {
    /// Creates an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Appends a field only when `value` is not empty
    pub fn add_non_empty(&mut self, name: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.add_field(name, value);
        }
        self
    }

    /// First value of the named field, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the named field is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All fields in insertion order
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PasteForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A request ready to be dispatched: the remote procedure plus its form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteRequest {
    /// Remote procedure to call
    pub method: ApiMethod,
    /// Form fields sent in the POST body
    pub form: PasteForm,
}

impl PasteRequest {
    /// Wraps an arbitrary form for the given method
    #[must_use]
    pub fn new(method: ApiMethod, form: PasteForm) -> Self {
        Self { method, form }
    }

    /// `create`: `paste` always, `title` and `authenticate` only when non-empty
    #[must_use]
    pub fn create(body: &str, title: &str, auth: &str) -> Self {
        let mut form = PasteForm::new();
        form.add_field(FIELD_PASTE, body);
        form.add_non_empty(FIELD_TITLE, title);
        form.add_non_empty(FIELD_AUTHENTICATE, auth);
        Self::new(ApiMethod::Create, form)
    }

    /// `get`: only `id`, never authenticated
    #[must_use]
    pub fn get(id: &str) -> Self {
        let mut form = PasteForm::new();
        form.add_field(FIELD_ID, id);
        Self::new(ApiMethod::Get, form)
    }

    /// `list`: `authenticate` is always sent, even when empty
    #[must_use]
    pub fn list(auth: &str) -> Self {
        let mut form = PasteForm::new();
        form.add_field(FIELD_AUTHENTICATE, auth);
        Self::new(ApiMethod::List, form)
    }

    /// `delete`: `id` and `authenticate`, the latter even when empty
    #[must_use]
    pub fn delete(id: &str, auth: &str) -> Self {
        let mut form = PasteForm::new();
        form.add_field(FIELD_ID, id);
        form.add_field(FIELD_AUTHENTICATE, auth);
        Self::new(ApiMethod::Delete, form)
    }

    /// `edit`: `id` and `authenticate`, then `paste`/`title` when non-empty
    #[must_use]
    pub fn edit(id: &str, body: &str, title: &str, auth: &str) -> Self {
        let mut form = PasteForm::new();
        form.add_field(FIELD_ID, id);
        form.add_field(FIELD_AUTHENTICATE, auth);
        form.add_non_empty(FIELD_PASTE, body);
        form.add_non_empty(FIELD_TITLE, title);
        Self::new(ApiMethod::Edit, form)
    }

    /// Fully-qualified endpoint: `{base_url}/{method}.{format}`
    #[must_use]
    pub fn endpoint(&self, base_url: &str, format: ResponseFormat) -> String {
        format!(
            "{}/{}.{}",
            base_url.trim_end_matches('/'),
            self.method,
            format
        )
    }
}
