//! I/O utilities for file handling
//!
//! Byte order detection and primitive decoding over in-memory buffers.

pub mod byte_order;
