//! Tests for mail transports and mailer assembly

mod factory_tests;
