pub mod profile_service;
pub mod quiz_generator_service;
pub mod quiz_session_service;
pub mod schedule_service;
pub mod syllabus_service;
pub mod tutor_service;

pub use profile_service::ProfileService;
pub use quiz_generator_service::QuizGeneratorService;
pub use quiz_session_service::QuizSessionService;
pub use schedule_service::ScheduleService;
pub use syllabus_service::SyllabusService;
pub use tutor_service::TutorService;
