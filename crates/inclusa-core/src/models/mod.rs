pub mod consent;
pub mod demographics;
pub mod form_data;
pub mod input;
pub mod language;
pub mod medical_history;
pub mod participant;
pub mod research;
pub mod step;
pub mod submission;
pub mod symptoms;
