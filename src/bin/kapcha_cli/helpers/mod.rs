// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA
// ABOUTME: Helper modules for kapcha-cli
// ABOUTME: Output formatting shared by the commands

pub mod display;
