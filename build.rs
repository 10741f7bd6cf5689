use tonic_build::manual::{Builder, Method, Service};

const PROST_CODEC: &str = "tonic::codec::ProstCodec";

fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(input)
        .output_type(output)
        .codec_path(PROST_CODEC)
        .build()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let contact_manager = Service::builder()
        .name("ContactManager")
        .package("contact_manager.v1")
        .method(unary(
            "create_contact",
            "CreateContact",
            "crate::server::proto::CreateContactRequest",
            "crate::server::proto::CreateContactResponse",
        ))
        .method(unary(
            "get_contact_by_name",
            "GetContactByName",
            "crate::server::proto::GetContactByNameRequest",
            "crate::server::proto::GetContactResponse",
        ))
        .method(unary(
            "get_contact_by_email",
            "GetContactByEmail",
            "crate::server::proto::GetContactByEmailRequest",
            "crate::server::proto::GetContactResponse",
        ))
        .method(unary(
            "get_contact_by_phone",
            "GetContactByPhone",
            "crate::server::proto::GetContactByPhoneRequest",
            "crate::server::proto::GetContactResponse",
        ))
        .method(unary(
            "delete_contact",
            "DeleteContact",
            "crate::server::proto::DeleteContactRequest",
            "crate::server::proto::DeleteContactResponse",
        ))
        .build();

    let auth = Service::builder()
        .name("Auth")
        .package("auth")
        .method(unary(
            "validate_token",
            "ValidateToken",
            "crate::client::proto::ValidateTokenRequest",
            "crate::client::proto::ValidateTokenResponse",
        ))
        .build();

    Builder::new().compile(&[contact_manager, auth]);
}
