pub mod analyzer;
pub mod coordinator;
pub mod lexicon;
