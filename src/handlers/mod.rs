use actix_web::web;

pub mod health_handler;
pub mod quiz_handler;

pub use health_handler::health_check;
pub use quiz_handler::{create_quiz, json_config};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_quiz).service(health_check);
}
