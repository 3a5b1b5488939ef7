//! Legacy collection client for the v2 resource-object API.
//!
//! The collection API predates v3 and is addressed either through
//! `api.bigcommerce.com` with OAuth headers or directly against a store's
//! own URL with basic auth. It is incompatible with v3 endpoints; the
//! facade rejects collection calls when v3 is selected.

mod client;

pub use client::LegacyClient;
