//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod hackathon_repo;
pub mod practice_repo;
pub mod problem_repo;
pub mod registration_repo;
pub mod team_repo;
pub mod user_repo;

pub use hackathon_repo::HackathonRepository;
pub use practice_repo::PracticeRepository;
pub use problem_repo::ProblemRepository;
pub use registration_repo::RegistrationRepository;
pub use team_repo::TeamRepository;
pub use user_repo::UserRepository;
