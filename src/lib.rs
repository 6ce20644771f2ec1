// SPDX-FileCopyrightText: 2026 Procserve Contributors
// SPDX-License-Identifier: MIT

//! Procserve — a minimal MCP demo server plus UI-test server configuration.
//!
//! Two independent pieces: [`config`] applies permissive overrides to a
//! harness-owned [`config::ServerSettings`] so a UI test suite can launch the
//! content server in automation-friendly mode, and [`mcp`] exposes a single
//! `process_data` tool over streamable HTTP (or stdio). Neither piece is meant
//! for production use.

pub mod config;
pub mod mcp;
