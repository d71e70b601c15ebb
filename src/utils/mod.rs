pub mod init_route;
pub mod nearby;
pub mod rounding;
