pub mod alert;
pub mod indicators;
pub mod price;
