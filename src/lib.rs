//! Airwave agent: an LLM radio host that takes song requests over WebSocket.
//!
//! At startup the song catalog is chunked and fed to the model ("ingest"
//! calls); once every chunk is summarized, clients may send requests and get
//! back a structured three-song pick plus a synthesized voice announcement.

// Strict lint policy: no unsafe, nothing undocumented, nothing unused.
#![deny(warnings)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(dead_code)]
#![deny(non_camel_case_types)]
#![deny(unused_imports)]
#![deny(unused_variables)]
#![deny(unused_must_use)]
#![deny(non_snake_case)]
#![deny(non_upper_case_globals)]
#![deny(nonstandard_style)]
#![forbid(unsafe_op_in_unsafe_fn)]
// Clippy held to the same bar.
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::print_stdout)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_in_result)]
#![deny(clippy::module_inception)]
#![deny(clippy::redundant_clone)]
#![deny(overflowing_literals)]

/// Runtime configuration for the station.
pub mod config;
/// Catalog ingestion and suggestion core: chunker, summarizer, station state.
pub mod engine;
/// Model backend seam and the OpenAI-compatible client.
pub mod llm;
/// HTTP + WebSocket server surface.
#[allow(
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::unused_async
)]
pub mod server;
/// Entry helpers to bootstrap and run the station.
pub mod start_airwave_agent;
/// Synthesized speech generation and on-disk audio cache.
pub mod voice;
