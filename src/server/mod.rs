//! Server-side API backend and business logic.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, session checks and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as author-match checks and validation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and the authentication guard
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, migrations and session store initialization
//! - **Router** (`router`) - Axum route configuration and OpenAPI document
//! - **Util** (`util`) - Password hashing
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** resolves the requester through `AuthGuard` where a route needs a session
//! 3. **Controller** converts the DTO to a param and calls the service with the requester ID
//! 4. **Service** validates input and runs its reads and writes in one transaction
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
