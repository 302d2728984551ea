// ABOUTME: Re-exports helper modules for the laufplan CLI
// ABOUTME: Interactive prompts and status output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Laufplan Contributors

pub mod display;
pub mod prompts;
