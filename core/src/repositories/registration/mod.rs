#[path = "trait.rs"]
mod trait_;
pub mod mock;


pub use mock::MockRegistrationRepository;
pub use trait_::RegistrationRepository;
