// SPDX-FileCopyrightText: 2026 Procserve Contributors
// SPDX-License-Identifier: MIT

//! Model Context Protocol (MCP) server surface.
//!
//! One tool, `process_data`, served statelessly over streamable HTTP (behind a
//! fully permissive CORS layer) or over stdio.

mod server;
mod types;

pub use server::ProcServeMcp;
