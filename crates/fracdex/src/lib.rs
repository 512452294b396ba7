#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod between;
mod digits;
mod error;
mod generator;
mod integer;
mod midpoint;
mod random;

pub use crate::between::*;
pub use crate::digits::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::integer::*;
pub use crate::midpoint::*;
pub use crate::random::*;
