// Composition root for the case routing service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the store adapters and wire them into the use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
