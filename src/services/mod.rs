//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod evaluation;
pub mod hackathon_service;
pub mod practice_service;
pub mod problem_service;
pub mod registration_service;
pub mod team_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use evaluation::{Evaluation, EvaluationClient};
pub use hackathon_service::HackathonService;
pub use practice_service::PracticeService;
pub use problem_service::ProblemService;
pub use registration_service::RegistrationService;
pub use team_service::TeamService;
pub use user_service::UserService;
