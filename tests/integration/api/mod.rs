pub mod activity_test;
pub mod auth_test;
pub mod chat_test;
pub mod match_test;
