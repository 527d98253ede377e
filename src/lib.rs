//! Generates the Vulkan conversion module: zero-cost, compile-time checked
//! casts between the wrapper types (`vk::Image`) and the raw C types
//! (`VkImage`) they are binary-compatible with. In order to use, first create
//! a [`VkRegistry`] from a Vulkan XML document and then call
//! [`gen_convert()`](VkRegistry::gen_convert) with a [`GenConfig`] describing
//! the inclusion policy. The emitted module is meant to be `include!`d where
//! both type families are in scope; every conversion sits behind a `const`
//! size and alignment assertion, so a layout mismatch fails the consumer's
//! build instead of corrupting data at run time.
//!
//! The accompanying binary wires the pipeline to a command line: it loads the
//! registry from a path or URL and writes the generated module to standard
//! output, leaving standard error to diagnostics.

pub mod generator;
pub mod registry;

pub use generator::GenConfig;
pub use registry::{RegistryError, RegistrySource, VkRegistry};
