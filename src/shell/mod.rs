// Composition root for the users bounded context.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the in-memory store and wire it into the use case handlers.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
