//! Event registration service module

mod service;


pub use service::EventService;
