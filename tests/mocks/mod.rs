mod mock_contact_repository;
mod mock_identity_validator;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_identity_validator::MockIdentityValidator;
