//! CLI infrastructure for the oxo game
//!
//! This module provides the command-line interface for playing against the
//! engine, running scripted matchups, and inspecting positions.

pub mod commands;
