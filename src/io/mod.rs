//! I/O utilities for binary point encodings
//!
//! This module provides the byte order strategies used by the
//! well-known binary codec.

pub mod byte_order;
