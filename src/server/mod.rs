//! Server-side API backend.
//!
//! This module contains the complete backend: bearer token authentication, resource
//! endpoints, the entity store and the infrastructure needed to run them. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Composition of store reads into endpoint results
//! - **Data Layer** (`data/`) - Repositories and the `EntityStore` trait with its SeaORM implementation
//! - **Model Layer** (`model/`) - Domain models, lookups and provisioning parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard
//! - **Extractors** (`extract`) - Query and path extractors with JSON rejections
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (entity store, auth guard)
//! - **Startup** (`startup`) - Tracing, database connection and shutdown signal
//! - **Router** (`router`) - Axum route configuration, CORS and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and matches a route
//! 2. **Middleware** rejects requests without a valid bearer token
//! 3. **Controller** builds a lookup from path and query, calls the service
//! 4. **Service** reads from the entity store and assembles domain models
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts domain models to DTOs and returns JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
