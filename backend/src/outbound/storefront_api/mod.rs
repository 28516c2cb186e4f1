//! Storefront backend API adapters.
//!
//! A single reqwest-backed [`StorefrontApi`] implements the access,
//! catalogue, rating and related-courses ports against one base URL.

mod access;
mod catalogue;
mod client;
mod dto;
mod rating;
mod related;

pub use client::{StorefrontApi, StorefrontApiError};
