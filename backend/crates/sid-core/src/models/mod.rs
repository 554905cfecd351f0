pub mod credential_record;
pub mod dashboard_route;
pub mod email;
pub mod identity;
pub mod page;
pub mod role;
pub mod sign_up_request;
