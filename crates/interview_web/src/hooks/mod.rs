pub mod route_logging;
