//! Common test utilities for interaction classification tests.
//!
//! This module provides test infrastructure including:
//!
//! - [`harness`] - HTTP test server with the classification middleware
//! - [`fixtures`] - Request scenarios and id generation
//! - [`assertions`] - Invariant checks on classification results

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod harness;
