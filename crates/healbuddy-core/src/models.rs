pub mod answer;
pub mod outcome;
pub mod screening;
pub mod transcript;
