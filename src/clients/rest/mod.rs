//! The BigCommerce API facade.
//!
//! This module provides [`BigcommerceClient`], the high-level client that
//! builds `stores/{hash}/{version}/{resource}` request URIs, forwards HTTP
//! verbs to the underlying [`HttpClient`](crate::clients::HttpClient),
//! pages through list endpoints, and routes legacy collection calls.

mod client;

pub use client::{BigcommerceClient, PageOptions, DEFAULT_PAGE_SIZE};
