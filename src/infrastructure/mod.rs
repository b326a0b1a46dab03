pub mod nlp;
pub mod observability;
pub mod text_processing;
