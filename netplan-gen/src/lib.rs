//! Netplan YAML generation for ethernet, bond, and bridge interfaces.
//!
//! The compiler and serializer live in `netplan-core`. This crate adds the
//! pieces around them that the `netplan-gen` binary needs:
//!
//! - [`request`] — Normalize structured and legacy JSON payloads
//! - [`defaults`] — Renderer and bond mode defaults from TOML
//! - [`report`] — Terminal-friendly colored summaries of a compiled document
//!
//! # Examples
//!
//! ```ignore
//! use netplan_core::{compile, serialize};
//! use netplan_gen::defaults::default_generator_defaults;
//! use netplan_gen::request::GenerateRequest;
//!
//! let request = GenerateRequest::from_json(r#"{"interface_type":"ethernet","interface_name":"eth0"}"#)?
//!     .with_defaults(&default_generator_defaults());
//! let config = compile(&request.interfaces, &request.renderer)?;
//! print!("{}", serialize(&config));
//! ```

pub mod defaults;
pub mod report;
pub mod request;
