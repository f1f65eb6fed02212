//! Request guards applied in front of the API routes.

pub mod auth;

#[cfg(test)]
mod test;
