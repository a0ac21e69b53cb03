mod api_ext;
mod database_ext;
mod user;
mod user_create_params;

pub use self::{user::User, user_create_params::UserCreateParams};
