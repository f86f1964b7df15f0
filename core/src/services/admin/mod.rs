//! Admin panel queries and public counters

mod service;


pub use service::AdminService;
