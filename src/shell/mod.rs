// Composition root for the parking operations service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory infrastructure and load the directory seed.
// - Wire implementations into the access and shift use cases.
// - Expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
