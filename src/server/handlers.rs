//! gRPC handlers for the contact manager.
//!
//! Every RPC runs the same pipeline: presence checks, format checks, caller
//! identity, then the service call. Input is checked on a borrowed request so
//! a malformed call is rejected before the caller identity is consulted. Validation failures never reach the
//! service, and every service error goes through [`contact_status`].

use crate::auth::CallerIdentity;
use crate::domain::{
    require, ContactId, EmailAddress, NewContact, PhoneNumber, PhonePattern, ValidationError,
};
use crate::error::ContactError;
use crate::server::proto::contact_manager_server::ContactManager;
use crate::server::proto::*;
use crate::services::ContactService;
use std::sync::Arc;
use tonic::{Request, Response, Status};

/// Map a client input error to `INVALID_ARGUMENT`.
fn invalid_argument(err: ValidationError) -> Status {
    Status::invalid_argument(err.to_string())
}

/// The single mapping from service errors to caller-visible statuses.
///
/// Storage detail is logged by the service and never echoed to the caller.
pub fn contact_status(err: ContactError) -> Status {
    match err {
        ContactError::ContactExists => Status::already_exists("contact already exists"),
        ContactError::ContactNotFound => Status::not_found("contact not found"),
        ContactError::Storage(_) => Status::internal("internal error"),
    }
}

/// gRPC handler backed by a [`ContactService`].
///
/// Expects a [`CallerIdentity`] in each request's extensions; wrap it in
/// [`crate::auth::AuthenticatedContactManager`] before serving.
#[derive(Clone)]
pub struct ContactManagerRpc {
    service: Arc<dyn ContactService>,
    phone_pattern: PhonePattern,
}

impl ContactManagerRpc {
    pub fn new(service: Arc<dyn ContactService>, phone_pattern: PhonePattern) -> Self {
        Self {
            service,
            phone_pattern,
        }
    }

    fn parse_email(email: &str) -> Result<EmailAddress, Status> {
        require("email", email).map_err(invalid_argument)?;
        EmailAddress::new(email).map_err(invalid_argument)
    }

    fn parse_phone(&self, phone: &str) -> Result<PhoneNumber, Status> {
        require("phone", phone).map_err(invalid_argument)?;
        PhoneNumber::parse(phone, &self.phone_pattern).map_err(invalid_argument)
    }
}

#[tonic::async_trait]
impl ContactManager for ContactManagerRpc {
    async fn create_contact(
        &self,
        request: Request<CreateContactRequest>,
    ) -> Result<Response<CreateContactResponse>, Status> {
        let req = request.get_ref();
        let contact = NewContact::parse(&req.name, &req.email, &req.phone, &self.phone_pattern)
            .map_err(invalid_argument)?;
        let creator = CallerIdentity::from_request(&request)?;

        let id = self
            .service
            .create_contact(&creator, contact)
            .await
            .map_err(contact_status)?;

        Ok(Response::new(CreateContactResponse {
            id: id.get(),
            success: true,
        }))
    }

    async fn get_contact_by_name(
        &self,
        request: Request<GetContactByNameRequest>,
    ) -> Result<Response<GetContactResponse>, Status> {
        require("name", &request.get_ref().name).map_err(invalid_argument)?;
        let creator = CallerIdentity::from_request(&request)?;
        let name = request.into_inner().name;

        let contact = self
            .service
            .get_contact_by_name(&creator, name)
            .await
            .map_err(contact_status)?;

        Ok(Response::new(contact.into()))
    }

    async fn get_contact_by_email(
        &self,
        request: Request<GetContactByEmailRequest>,
    ) -> Result<Response<GetContactResponse>, Status> {
        let email = Self::parse_email(&request.get_ref().email)?;
        let creator = CallerIdentity::from_request(&request)?;

        let contact = self
            .service
            .get_contact_by_email(&creator, email)
            .await
            .map_err(contact_status)?;

        Ok(Response::new(contact.into()))
    }

    async fn get_contact_by_phone(
        &self,
        request: Request<GetContactByPhoneRequest>,
    ) -> Result<Response<GetContactResponse>, Status> {
        let phone = self.parse_phone(&request.get_ref().phone)?;
        let creator = CallerIdentity::from_request(&request)?;

        let contact = self
            .service
            .get_contact_by_phone(&creator, phone)
            .await
            .map_err(contact_status)?;

        Ok(Response::new(contact.into()))
    }

    async fn delete_contact(
        &self,
        request: Request<DeleteContactRequest>,
    ) -> Result<Response<DeleteContactResponse>, Status> {
        let id = ContactId::new(request.get_ref().id).map_err(invalid_argument)?;
        let creator = CallerIdentity::from_request(&request)?;

        self.service
            .delete_contact(&creator, id)
            .await
            .map_err(contact_status)?;

        Ok(Response::new(DeleteContactResponse { success: true }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use tonic::Code;

    #[test]
    fn test_contact_status_mapping() {
        assert_eq!(
            contact_status(ContactError::ContactExists).code(),
            Code::AlreadyExists
        );
        assert_eq!(
            contact_status(ContactError::ContactNotFound).code(),
            Code::NotFound
        );

        let status = contact_status(ContactError::Storage(StorageError::Task(
            "disk I/O error at /var/lib/contacts.db".to_string(),
        )));
        assert_eq!(status.code(), Code::Internal);
        assert!(!status.message().contains("disk"));
    }

    #[test]
    fn test_invalid_argument_message() {
        let status = invalid_argument(ValidationError::MissingField("name"));
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "name required");
    }
}
