//! Selection overlay primitives for the canvas editor.
//!
//! This crate turns selection geometry that the editor has already computed
//! into renderable `<rect>` nodes: the corner resize handles and the outline
//! drawn around a selection. Every coordinate is quantized before it is
//! written so the emitted markup stays stable between frames. Deciding where
//! the handles go, hit-testing them, and reacting to drags all happen in the
//! host; this layer is pure and keeps no state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`precision`] | Coordinate quantization and attribute formatting |
//! | [`node`] | The [`node::RectNode`] output type (SVG markup, JSON) |
//! | [`handle`] | Corner handle renderer |
//! | [`outline`] | Selection outline renderer |
//! | [`components`] | Replaceable renderer registry |
//! | [`config`] | Environment-driven settings |
//! | [`consts`] | Shared numeric constants |

pub mod components;
pub mod config;
pub mod consts;
pub mod handle;
pub mod node;
pub mod outline;
pub mod precision;
