//! DamBTI - Personality diagnosis that matches you to a Japanese dam
//!
//! Survey answers are reduced to a six-dimension trait vector, summarised as
//! descriptive type tags, and ranked against a curated corpus of dams by
//! cosine similarity.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
