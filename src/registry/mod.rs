mod crawler;
mod source;

pub use source::{RegistrySource, VK_XML_URL};

use std::path::PathBuf;
use std::{fmt, io};

use thiserror::Error;
use xml::{EventReader, ParserConfig};

/// Failure to obtain or parse a registry document.
///
/// Every variant aborts generation outright: a truncated output document
/// fails the consumer's build in non-obvious ways, so nothing is emitted
/// unless the whole registry loaded cleanly.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry could not be read from the local filesystem.
    #[error("could not read registry file `{}`", .path.display())]
    SourceFile {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
    /// The registry could not be fetched over HTTP.
    #[error("could not fetch registry from `{url}`")]
    SourceFetch {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    /// The document is not well-formed XML.
    #[error("registry is not well-formed XML")]
    Malformed(#[from] xml::reader::Error),
    /// The document parsed, but no `types` section sits under the root.
    #[error("registry has no top-level `types` section")]
    MissingTypesSection,
}

/// Category of a registry type entry. Only `struct` and `handle` entries have
/// a binary-compatible wrapper counterpart; everything else collapses to
/// [`Other`](VkCategory::Other).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VkCategory {
    Struct,
    Handle,
    Other,
}

impl VkCategory {
    fn from_attr(attr: Option<&str>) -> VkCategory {
        match attr {
            Some("struct") => VkCategory::Struct,
            Some("handle") => VkCategory::Handle,
            _ => VkCategory::Other,
        }
    }
}

impl fmt::Display for VkCategory {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(match self {
            VkCategory::Struct => "struct",
            VkCategory::Handle => "handle",
            VkCategory::Other => "other",
        })
    }
}

/// One top-level `type` entry from the registry's `types` section.
///
/// Handles declared through `VK_DEFINE_HANDLE` blocks carry their name in a
/// child element, not a `name` attribute, so they parse with `name: None`;
/// the hand-listed section of the generated output covers those instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VkTypeEntry {
    pub category: VkCategory,
    pub name: Option<String>,
}

/// The ordered type entries of a parsed Vulkan XML registry.
#[derive(Debug)]
pub struct VkRegistry {
    types: Vec<VkTypeEntry>,
}

impl VkRegistry {
    /// Parses a Vulkan XML document held in memory.
    pub fn new(vk_xml: &[u8]) -> Result<VkRegistry, RegistryError> {
        let mut registry = VkRegistry {
            types: Vec::with_capacity(512),
        };
        let reader = EventReader::new_with_config(vk_xml, ParserConfig::new().trim_whitespace(true));
        crawler::crawl(reader.into_iter(), &mut registry)?;
        Ok(registry)
    }

    /// Fetches the registry document from `source` and parses it.
    pub fn load(source: &RegistrySource) -> Result<VkRegistry, RegistryError> {
        VkRegistry::new(&source.fetch()?)
    }

    /// Type entries in document order.
    pub fn types(&self) -> &[VkTypeEntry] {
        &self.types
    }

    fn push_type(&mut self, entry: VkTypeEntry) {
        self.types.push(entry);
    }
}
