use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{consts, handlers, service};

pub fn create_app(
    assistant_service: Arc<service::AssistantService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(Data::from(assistant_service))
        // Any verb reaches the handler so it can answer with the 405 envelope itself.
        .service(web::resource(consts::CHAT_PATH).route(web::route().to(handlers::chat)))
}
