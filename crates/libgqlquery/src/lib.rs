pub use libgqlquery_core::*;
