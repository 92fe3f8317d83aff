// server/ - Static file responder
//
// Three fixed outcomes: the home document, the stylesheet, or the home
// document again for anything else (single-page fallback). A failed
// read is the only error, answered with a fixed plain-text 500.

mod routes;

pub use routes::{router, Route, SiteConfig};
