mod client;

pub use client::{decode_body, StressFetcher};
