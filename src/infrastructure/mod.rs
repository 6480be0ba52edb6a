// Infrastructure layer module
// Contains database adapters implementing the domain store ports

pub mod database;
pub mod repositories;
