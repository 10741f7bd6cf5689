//! Wire types for the SSO `auth.Auth` service.

/// Request for `auth.Auth/ValidateToken`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidateTokenRequest {
    #[prost(string, tag = "1")]
    pub token: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub app_id: i32,
}

/// Response for `auth.Auth/ValidateToken`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidateTokenResponse {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
}

include!(concat!(env!("OUT_DIR"), "/auth.Auth.rs"));
