pub mod dual_issue;
pub mod load_use;
