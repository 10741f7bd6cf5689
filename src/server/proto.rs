//! Wire types for the `contact_manager.v1.ContactManager` service.
//!
//! Messages are declared directly with `prost` derives; the service traits
//! and client are generated by `build.rs`.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateContactRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub phone: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateContactResponse {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(bool, tag = "2")]
    pub success: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetContactByNameRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetContactByEmailRequest {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetContactByPhoneRequest {
    #[prost(string, tag = "1")]
    pub phone: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetContactResponse {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub phone: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteContactRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteContactResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

impl From<crate::models::Contact> for GetContactResponse {
    fn from(contact: crate::models::Contact) -> Self {
        Self {
            id: contact.id.get(),
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/contact_manager.v1.ContactManager.rs"));
