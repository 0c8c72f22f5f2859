pub mod calculator;
pub mod detailed_table;
pub mod filter;
pub mod logic;
pub mod overview;
pub mod topic_wise;
pub mod view;
