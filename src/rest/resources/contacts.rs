//! Contacts resource.
//!
//! Contacts are called "persons" by the legacy API and "contacts" by the
//! current one. Agents (employees) are contacts too and are listed through
//! [`Contacts::agents`].

use serde::{Deserialize, Serialize};

use crate::clients::{
    ApiError, ApiResponse, FilterOperator, HttpMethod, OctadeskClient, Request,
};
use crate::config::ApiGeneration;
use crate::rest::{build_path, require_path, EndpointPath, ResourceOperation, SearchParams};

use super::to_body;

/// Declares a fieldless enum that travels as its numeric code.
macro_rules! numeric_code {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "u8", try_from = "u8")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $name {
            /// Returns the numeric code sent to the API.
            #[must_use]
            pub const fn code(self) -> u8 {
                self as u8
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok(Self::$variant), )+
                    other => Err(format!("unknown {} code {other}", stringify!($name))),
                }
            }
        }
    };
}

numeric_code! {
    /// Kind of person a contact represents.
    pub enum PersonType {
        /// Unspecified.
        None = 0,
        /// An agent of the account.
        Employee = 1,
        /// A customer.
        Customer = 2,
        /// A handler.
        Handler = 3,
        /// A system user.
        System = 4,
        /// An agent forwarding requests.
        ForwardingEmployee = 5,
    }
}

numeric_code! {
    /// Which tickets a customer may see.
    pub enum PermissionView {
        /// None.
        None = 0,
        /// Only their own requests.
        MyRequests = 1,
        /// Every request of their organization.
        MyOrganization = 2,
    }
}

numeric_code! {
    /// Which tickets an agent may handle.
    pub enum PermissionType {
        /// None.
        None = 0,
        /// Every ticket.
        All = 1,
        /// Tickets of their groups.
        Group = 2,
        /// Tickets of their groups plus tickets they interacted with.
        GroupPlusInteracted = 3,
    }
}

numeric_code! {
    /// What a participant of a ticket may do with it.
    pub enum ParticipantPermission {
        /// None.
        None = 0,
        /// Read only.
        ViewOnly = 1,
        /// Read and edit.
        ViewEdit = 2,
    }
}

numeric_code! {
    /// Role of a person in the account.
    pub enum RoleType {
        /// None.
        None = 0,
        /// Account owner.
        Owner = 1,
        /// Administrator.
        Admin = 2,
        /// Supervising agent.
        AgentMaster = 3,
        /// Agent.
        Agent = 4,
        /// Customer.
        Client = 5,
        /// Person belonging to a corporate customer.
        CorporatePerson = 6,
    }
}

/// Operations on contacts.
///
/// Obtained from [`OctadeskClient::contacts`].
#[derive(Debug, Clone, Copy)]
pub struct Contacts<'a> {
    client: &'a OctadeskClient,
}

impl<'a> Contacts<'a> {
    /// Resource name used in error messages.
    pub const NAME: &'static str = "Contacts";

    /// Endpoints per operation and generation.
    pub const PATHS: &'static [EndpointPath] = &[
        EndpointPath::new(ResourceOperation::Search, None, HttpMethod::Get, "/contacts"),
        EndpointPath::new(
            ResourceOperation::Create,
            Some(ApiGeneration::Legacy),
            HttpMethod::Post,
            "/persons",
        ),
        EndpointPath::new(
            ResourceOperation::Create,
            Some(ApiGeneration::Current),
            HttpMethod::Post,
            "/contacts",
        ),
        EndpointPath::new(
            ResourceOperation::Update,
            Some(ApiGeneration::Legacy),
            HttpMethod::Put,
            "/persons/{id}",
        ),
        EndpointPath::new(
            ResourceOperation::Update,
            Some(ApiGeneration::Current),
            HttpMethod::Put,
            "/contacts/{id}",
        ),
        EndpointPath::new(
            ResourceOperation::Patch,
            Some(ApiGeneration::Current),
            HttpMethod::Patch,
            "/contacts/{id}",
        ),
        EndpointPath::new(
            ResourceOperation::GetById,
            Some(ApiGeneration::Legacy),
            HttpMethod::Get,
            "/persons/{id}",
        ),
        EndpointPath::new(
            ResourceOperation::GetById,
            Some(ApiGeneration::Current),
            HttpMethod::Get,
            "/contacts/{id}",
        ),
        EndpointPath::new(
            ResourceOperation::GetByEmail,
            Some(ApiGeneration::Legacy),
            HttpMethod::Get,
            "/persons",
        ),
        EndpointPath::new(
            ResourceOperation::GetByEmail,
            Some(ApiGeneration::Current),
            HttpMethod::Get,
            "/contacts",
        ),
        EndpointPath::new(
            ResourceOperation::GetByPhoneNumber,
            Some(ApiGeneration::Legacy),
            HttpMethod::Post,
            "/persons/filter",
        ),
        EndpointPath::new(
            ResourceOperation::GetByPhoneNumber,
            Some(ApiGeneration::Current),
            HttpMethod::Get,
            "/contacts",
        ),
        EndpointPath::new(
            ResourceOperation::Agents,
            None,
            HttpMethod::Get,
            "/persons/agents",
        ),
        EndpointPath::new(
            ResourceOperation::UpdateAvatarUrl,
            None,
            HttpMethod::Put,
            "/persons/{id}",
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

    /// Searches contacts.
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

    /// Creates a contact from `fields`.
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

    /// Replaces the contact `id` with `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if `fields` cannot be turned into
    /// JSON, or any error from the call.
    pub async fn update<T>(&self, id: &str, fields: &T) -> Result<ApiResponse, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path(ResourceOperation::Update)?;
        let request = Request::builder(path.http_method, build_path(path.template, &[("id", id)]))
            .body(to_body(fields)?)
            .build()?;
        self.client.send(&request).await
    }

    /// Updates only the given `fields` of the contact `id`.
    ///
    /// Only the current API supports partial updates.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::UnsupportedOperation`](crate::clients::InvalidRequestError::UnsupportedOperation)
    /// on the legacy API, before anything is sent.
    pub async fn patch<T>(&self, id: &str, fields: &T) -> Result<ApiResponse, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path(ResourceOperation::Patch)?;
        let request = Request::builder(path.http_method, build_path(path.template, &[("id", id)]))
            .body(to_body(fields)?)
            .build()?;
        self.client.send(&request).await
    }

    /// Fetches the contact `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_by_id(&self, id: &str) -> Result<ApiResponse, ApiError> {
        let path = self.path(ResourceOperation::GetById)?;
        let request =
            Request::builder(path.http_method, build_path(path.template, &[("id", id)])).build()?;
        self.client.send(&request).await
    }

    /// Fetches contacts whose email is `email`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_by_email(&self, email: &str) -> Result<ApiResponse, ApiError> {
        let path = self.path(ResourceOperation::GetByEmail)?;
        let request = Request::builder(path.http_method, path.template)
            .filter("email", FilterOperator::Eq, email)
            .build()?;
        self.client.send(&request).await
    }

    /// Fetches contacts with the phone number `number` in `country_code`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_by_phone_number(
        &self,
        country_code: &str,
        number: &str,
    ) -> Result<ApiResponse, ApiError> {
        let path = self.path(ResourceOperation::GetByPhoneNumber)?;
        let request = Request::builder(path.http_method, path.template)
            .filter("phoneContacts.countryCode", FilterOperator::Eq, country_code)
            .filter("phoneContacts.number", FilterOperator::Eq, number)
            .build()?;
        self.client.send(&request).await
    }

    /// Lists agents, optionally narrowed to those matching `email_or_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn agents(
        &self,
        email_or_name: Option<&str>,
        page: u32,
        detailed: bool,
    ) -> Result<ApiResponse, ApiError> {
        let path = self.path(ResourceOperation::Agents)?;
        // The API spells the search keyword parameter `keywork`, and reads
        // `detailed` as `1` or empty.
        let request = Request::builder(path.http_method, path.template)
            .filter("keywork", FilterOperator::Eq, email_or_name.unwrap_or_default())
            .filter("detailed", FilterOperator::Eq, if detailed { "1" } else { "" })
            .page(page)
            .build()?;
        self.client.send(&request).await
    }

    /// Sets the avatar of the contact `id` to the image at `url`.
    ///
    /// Sent as form fields `email` and `thumbUrl`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_avatar_url(
        &self,
        id: &str,
        email: &str,
        url: &str,
    ) -> Result<ApiResponse, ApiError> {
        let path = self.path(ResourceOperation::UpdateAvatarUrl)?;
        let request = Request::builder(path.http_method, build_path(path.template, &[("id", id)]))
            .form_field("email", email)
            .form_field("thumbUrl", url)
            .build()?;
        self.client.send(&request).await
    }
}
