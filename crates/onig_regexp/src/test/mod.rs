// Test module organization
pub mod test_cache;
pub mod test_regexp;
pub mod test_template;
