pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::{error, web};

use crate::auth::{AuthMiddleware, AuthService};
use crate::error::AppError;
use crate::store::Store;

/// Registers shared state and every route of the API.
///
/// `/health`, `/register` and `/login` are public; everything under `/tasks`
/// sits behind `AuthMiddleware`.
pub fn config(store: Store, auth_service: AuthService) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let tokens = auth_service.tokens();

        cfg.app_data(web::Data::new(store))
            .app_data(web::Data::new(auth_service))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = match &err {
                    error::JsonPayloadError::Deserialize(e) => e.to_string(),
                    other => other.to_string(),
                };
                AppError::BadRequest(message).into()
            }))
            // The only path parameter is a task id; one that is not a UUID names no task.
            .app_data(web::PathConfig::default().error_handler(|err, req| {
                log::debug!("Bad path {}: {}", req.path(), err);
                AppError::NotFound("Task not found".into()).into()
            }))
            .service(health::health)
            .service(auth::register)
            .service(auth::login)
            .service(
                web::scope("/tasks")
                    .wrap(AuthMiddleware::new(tokens))
                    .service(tasks::get_tasks)
                    .service(tasks::create_task)
                    .service(tasks::get_task)
                    .service(tasks::update_task)
                    .service(tasks::delete_task),
            );
    }
}
