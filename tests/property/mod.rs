pub mod conversation_proptest;
pub mod scorer_proptest;
