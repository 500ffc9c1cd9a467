//! Persona Insight - Personality assessment scoring service
//!
//! This crate scores answered questionnaires for four personality frameworks
//! (MBTI, DISC, Big Five, Enneagram), resolves each into a classification and
//! merges completed frameworks into a composite report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
