// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card stack state, transforms, and z-order bookkeeping for shuffle widgets.
//!
//! `shuffle_core` holds everything about a shuffling card stack that does not
//! touch a live document. It is `no_std` compatible (with `alloc`); hosts
//! such as `shuffle_backend_web` supply the elements and the transition
//! signals.
//!
//! # Architecture
//!
//! A click becomes a shift of the stack, which becomes a handful of surface
//! writes and, when the host animates, one pending completion:
//!
//! ```text
//!   click / API call
//!       │
//!       ▼
//!   CardStack::advance() / retreat() ──► CardSurface writes
//!       │                                 (class, transform, listener)
//!       ▼
//!   Pending ──► transition end ──► CardStack::finish()
//!          └──► timeout ─────────► CardStack::expire()
//!                                        │
//!                                        ▼
//!                          CardSurface writes (z-index, reset transform)
//! ```
//!
//! **[`stack`]**: the order sequence, the busy guard, and the two shift
//! operations with their completion handlers.
//!
//! **[`card`]**: per-card metadata parsed from `data-*` attributes, with
//! zero defaults for anything missing or malformed.
//!
//! **[`transform`]**: resting and animated-out card transforms and their
//! CSS rendering.
//!
//! **[`zorder`]**: the contiguous z-index range that the moved card lands
//! at either end of.
//!
//! **[`surface`]**: the [`CardSurface`](surface::CardSurface) trait that
//! hosts implement to apply card state to real elements.
//!
//! **[`config`]**: [`StackConfig`](config::StackConfig), resolved once at
//! construction.
//!
//! **[`registry`]**: container-keyed lookup of live stacks.
//!
//! **[`time`]**: microsecond host time used for completion deadlines.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod card;
pub mod config;
pub mod direction;
pub mod registry;
pub mod stack;
pub mod surface;
pub mod time;
pub mod trace;
pub mod transform;
pub mod zorder;
