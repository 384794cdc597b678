pub mod appointment;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod payment;
pub mod shipping;
