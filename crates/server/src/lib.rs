//! Web dashboard for the TBM bike-share and transit maps.
//!
//! Three views share one sidebar: a home page, the VCub station map with its
//! date/time selectors, and the Bus • Tram • BatCub network map. Every view is
//! rendered synchronously from the memoized datasets; the HTTP layer only
//! decodes the query and moves the render onto the blocking pool.

pub mod config;
pub mod facts;
pub mod logger;
pub mod reports;
pub mod routes;
pub mod shell;
pub mod views;

pub use config::ShellConfig;
pub use shell::{Page, Shell, ShellError, View, ViewQuery, render_view};
