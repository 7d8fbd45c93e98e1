use actix_web::web;

pub mod profile_handler;
pub mod quiz_handler;
pub mod schedule_handler;
pub mod syllabus_handler;
pub mod tutor_handler;

pub use profile_handler::{get_profile, health_check, setup_profile};
pub use quiz_handler::{
    advance, check_answer, close_quiz_session, create_quiz_session, generate_quiz,
    get_quiz_session, jump_to, restart, retreat, select_option,
};
pub use schedule_handler::generate_schedule;
pub use syllabus_handler::process_syllabus;
pub use tutor_handler::{
    close_tutor_session, create_tutor_session, get_tutor_messages, send_tutor_message,
};

/// Registers every route the server exposes. Shared between the binary and
/// the HTTP-level tests so both always see the same surface.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(generate_quiz)
        .service(create_quiz_session)
        .service(get_quiz_session)
        .service(select_option)
        .service(check_answer)
        .service(advance)
        .service(retreat)
        .service(jump_to)
        .service(restart)
        .service(close_quiz_session)
        .service(process_syllabus)
        .service(generate_schedule)
        .service(setup_profile)
        .service(get_profile)
        .service(create_tutor_session)
        .service(get_tutor_messages)
        .service(send_tutor_message)
        .service(close_tutor_session);
}
