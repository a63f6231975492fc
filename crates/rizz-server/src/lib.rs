pub mod cli;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use routes::create_router;
pub use server::serve;

#[cfg(test)]
mod tests;
