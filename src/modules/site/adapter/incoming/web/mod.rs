pub mod html;
pub mod routes;
