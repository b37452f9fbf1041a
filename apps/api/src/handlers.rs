pub mod access;
pub mod deadlines;
pub mod health;
pub mod team;
