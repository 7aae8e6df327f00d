pub use yogastudio_models::ids::UserId;
pub use yogastudio_models::users::User;
