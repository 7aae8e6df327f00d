pub use yogastudio_models::ids::TeacherId;
pub use yogastudio_models::teachers::Teacher;
