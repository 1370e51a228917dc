// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration Tests for Staffbook Core
//!
//! These tests drive the controllers end to end against an HTTP store
//! talking to an in-process json-server stand-in.
//!
//! Run with: cargo test --test integration

mod contact_workflow_test;
mod fake_server;
mod http_store_test;
