//! Font source tests
//!
//! Parser and provider tests against small fonts written to temp dirs

mod directory_provider;
