//! Runtime dispatch over a family of extension delegates.
//!
//! A dispatch family groups objects sharing a common base view `B` under a
//! discriminator type `K`. Each member pairs an [`Extension`] of the base
//! with its discriminator value, so a caller holding only `dyn Dispatch`
//! can inspect the discriminator, reach the base view, and, through a
//! specialization, recover the concrete derived type with a checked cast.
//!
//! [`DelegateHolder`] stores one such member inline, without heap
//! allocation, erased to `dyn Dispatch`.
//!
//! [`Extension`]: crate::Extension

mod delegate;
mod holder;

pub use self::{
    delegate::{Dispatch, DispatchDelegate, DispatchSpecialization},
    holder::DelegateHolder,
};
