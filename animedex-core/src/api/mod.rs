/// Route paths served by animedex
pub mod routes;
