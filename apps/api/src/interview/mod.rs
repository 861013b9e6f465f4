// Interview session engine.
// Implements: prompt building, sensitive-topic filtering, the chat reply pipeline,
// the per-candidate session state machine, and the in-memory session store.
// All model calls go through llm_client::ModelClient.

pub mod builder;
pub mod chat;
pub mod filter;
pub mod handlers;
pub mod prompts;
pub mod session;
pub mod store;
