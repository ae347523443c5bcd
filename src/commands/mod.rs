pub mod input;
pub mod selftest;
pub mod session;
pub mod solve;
