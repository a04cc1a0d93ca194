pub mod output;
pub mod tournament;
