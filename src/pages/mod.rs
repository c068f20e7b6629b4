pub mod cluster;
pub mod consistent;
pub mod modulo;
pub mod not_found;
pub mod problem;
pub mod quiz;
pub mod virtual_nodes;
