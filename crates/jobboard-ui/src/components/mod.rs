pub mod notice;
pub mod private_route;
