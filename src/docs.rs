use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use yogastudio_core::ErrorResponse;
use yogastudio_models::{
    JwtResponse, LoginRequest, MessageResponse, Session, SessionDto, SignupRequest, Teacher, User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::register_user,
        crate::modules::sessions::controller::get_sessions,
        crate::modules::sessions::controller::get_session,
        crate::modules::sessions::controller::create_session,
        crate::modules::sessions::controller::update_session,
        crate::modules::sessions::controller::delete_session,
        crate::modules::participation::controller::participate,
        crate::modules::participation::controller::no_longer_participate,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::delete_user,
    ),
    components(
        schemas(
            LoginRequest,
            SignupRequest,
            JwtResponse,
            MessageResponse,
            ErrorResponse,
            Session,
            SessionDto,
            Teacher,
            User,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and registration"),
        (name = "Sessions", description = "Yoga sessions, admin-managed"),
        (name = "Participation", description = "Joining and leaving sessions"),
        (name = "Teachers", description = "Teachers leading sessions"),
        (name = "Users", description = "User accounts"),
    ),
    info(
        title = "Yoga Studio API",
        version = "0.1.0",
        description = "Sessions, teachers and attendance for a yoga studio",
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
