//! LA Metro route finder server.
//!
//! A web application that answers: "which line do I take from here to
//! there, and where do I change?"

pub mod cache;
pub mod config;
pub mod data;
pub mod domain;
pub mod metro_api;
pub mod network;
pub mod planner;
pub mod web;
