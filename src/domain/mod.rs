// Domain layer module exports
// Entities and store ports; independent of HTTP and database concerns

pub mod category;
pub mod expense;
pub mod repositories;
