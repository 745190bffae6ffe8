pub mod login;
pub mod postings;
