//! Tickets resource.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiError, ApiResponse, HttpMethod, OctadeskClient, Request};
use crate::config::ApiGeneration;
use crate::rest::{build_path, require_path, EndpointPath, ResourceOperation, SearchParams};

use super::to_body;

/// Built-in ticket statuses.
///
/// Octadesk identifies statuses both by a (Portuguese) name and by a UUID.
/// The published UUIDs of [`Solved`](Self::Solved) and [`Open`](Self::Open)
/// are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    /// A ticket nobody has handled yet.
    #[serde(rename = "novo")]
    New,
    /// Waiting on the customer.
    #[serde(rename = "pendente")]
    Pending,
    /// Solved.
    #[serde(rename = "resolvido")]
    Solved,
    /// Being worked on.
    #[serde(rename = "andamento")]
    Open,
    /// On hold.
    #[serde(rename = "em espera")]
    Hold,
    /// Rejected.
    #[serde(rename = "rejeitado")]
    Rejected,
    /// Canceled.
    #[serde(rename = "cancelado")]
    Canceled,
}

impl TicketStatus {
    /// Every built-in status.
    pub const ALL: [Self; 7] = [
        Self::New,
        Self::Pending,
        Self::Solved,
        Self::Open,
        Self::Hold,
        Self::Rejected,
        Self::Canceled,
    ];

    /// Returns the status name used by the API.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::New => "novo",
            Self::Pending => "pendente",
            Self::Solved => "resolvido",
            Self::Open => "andamento",
            Self::Hold => "em espera",
            Self::Rejected => "rejeitado",
            Self::Canceled => "cancelado",
        }
    }

    /// Returns the status UUID used by the API.
    #[must_use]
    pub const fn uuid(&self) -> &'static str {
        match self {
            Self::New => "ab59f270-ccb3-4eac-b4e3-5f2d23961dba",
            Self::Pending => "09350a7d-886d-4490-ae88-f3a3605ff587",
            Self::Solved | Self::Open => "b2c80a95-840c-4cd0-baa3-f266f303d626",
            Self::Hold => "8543caa3-23d2-47f0-bb60-7ccfba62e7b4",
            Self::Rejected => "62c696e4-ef22-314a-9f84-5c09153db659",
            Self::Canceled => "0cac3ff6-6039-4581-a727-c4dff94d5367",
        }
    }

    /// Looks up a status by its API name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.name() == name)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Properties tickets can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TicketSortBy {
    /// Ticket number.
    Number,
    /// Last update.
    LastDateUpdate,
    /// Opening date.
    OpenDate,
    /// SLA due date.
    SlaDueDate,
}

impl TicketSortBy {
    /// Returns the property name used by the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::LastDateUpdate => "lastDateUpdate",
            Self::OpenDate => "openDate",
            Self::SlaDueDate => "slaDueDate",
        }
    }
}

impl From<TicketSortBy> for String {
    fn from(sort_by: TicketSortBy) -> Self {
        sort_by.as_str().to_string()
    }
}

/// Operations on tickets.
///
/// Obtained from [`OctadeskClient::tickets`].
#[derive(Debug, Clone, Copy)]
pub struct Tickets<'a> {
    client: &'a OctadeskClient,
}

impl<'a> Tickets<'a> {
    /// Resource name used in error messages.
    pub const NAME: &'static str = "Tickets";

    /// Endpoints per operation and generation.
    pub const PATHS: &'static [EndpointPath] = &[
        EndpointPath::new(
            ResourceOperation::Search,
            Some(ApiGeneration::Legacy),
            HttpMethod::Get,
            "/tickets/search",
        ),
        EndpointPath::new(
            ResourceOperation::Search,
            Some(ApiGeneration::Current),
            HttpMethod::Get,
            "/tickets",
        ),
        EndpointPath::new(ResourceOperation::Create, None, HttpMethod::Post, "/tickets"),
        EndpointPath::new(
            ResourceOperation::Update,
            None,
            HttpMethod::Put,
            "/tickets/{number}",
        ),
        EndpointPath::new(
            ResourceOperation::GetByNumber,
            None,
            HttpMethod::Get,
            "/tickets/{number}",
        ),
        EndpointPath::new(
            ResourceOperation::Interactions,
            None,
            HttpMethod::Get,
            "/tickets/{number}/interactions",
        ),
    ];

    pub(crate) const fn new(client: &'a OctadeskClient) -> Self {
        Self { client }
    }

    fn path(&self, operation: ResourceOperation) -> Result<&'static EndpointPath, ApiError> {
        Ok(require_path(
            Self::NAME,
            Self::PATHS,
            operation,
            self.client.generation(),
        )?)
    }

    fn numbered(&self, operation: ResourceOperation, number: u64) -> Result<Request, ApiError> {
        let path = self.path(operation)?;
        let number = number.to_string();
        Request::builder(
            path.http_method,
            build_path(path.template, &[("number", number.as_str())]),
        )
        .build()
    }

    /// Searches tickets.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the parameters are invalid or the call fails.
    pub async fn search(&self, params: &SearchParams) -> Result<ApiResponse, ApiError> {
        let path = self.path(ResourceOperation::Search)?;
        let request = params
            .apply(Request::builder(path.http_method, path.template))
            .build()?;
        self.client.send(&request).await
    }

    /// Creates a ticket from `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if `fields` cannot be turned into
    /// JSON, or any error from the call.
    pub async fn create<T>(&self, fields: &T) -> Result<ApiResponse, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path(ResourceOperation::Create)?;
        let request = Request::builder(path.http_method, path.template)
            .body(to_body(fields)?)
            .build()?;
        self.client.send(&request).await
    }

    /// Updates the ticket `number` with `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if `fields` cannot be turned into
    /// JSON, or any error from the call.
    pub async fn update<T>(&self, number: u64, fields: &T) -> Result<ApiResponse, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path(ResourceOperation::Update)?;
        let number = number.to_string();
        let request = Request::builder(
            path.http_method,
            build_path(path.template, &[("number", number.as_str())]),
        )
        .body(to_body(fields)?)
        .build()?;
        self.client.send(&request).await
    }

    /// Fetches the ticket `number`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_by_number(&self, number: u64) -> Result<ApiResponse, ApiError> {
        let request = self.numbered(ResourceOperation::GetByNumber, number)?;
        self.client.send(&request).await
    }

    /// Lists the interactions of the ticket `number`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn interactions(&self, number: u64) -> Result<ApiResponse, ApiError> {
        let request = self.numbered(ResourceOperation::Interactions, number)?;
        self.client.send(&request).await
    }
}
