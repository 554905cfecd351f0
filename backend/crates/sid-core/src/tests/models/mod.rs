mod credential_record;
mod identity;
mod page;
mod role;
mod email;
