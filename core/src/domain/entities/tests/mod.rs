mod otp_tests;
mod registration_tests;
mod user_tests;
