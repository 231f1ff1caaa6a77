use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use crate::{
    app_state::AppState,
    handlers,
    middleware::{cors, RequestIdMiddleware},
};

pub const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %{x-request-id}o %Ts"#;

/// Assembles the service: routes, JSON config, CORS, request ids and the
/// access log.
///
/// `Logger` is the outermost layer so it sees the `x-request-id` header.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let allowed_origin = state.config.allowed_origin.clone();

    App::new()
        .app_data(web::Data::new(state))
        .app_data(handlers::json_config())
        .wrap(cors(&allowed_origin))
        .wrap(RequestIdMiddleware)
        .wrap(Logger::new(ACCESS_LOG_FORMAT))
        .configure(handlers::configure)
}
