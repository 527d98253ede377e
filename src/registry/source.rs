use std::fs;
use std::path::PathBuf;

use tracing::info;

use super::RegistryError;

/// Canonical location of the current Vulkan registry.
pub const VK_XML_URL: &str =
    "https://raw.githubusercontent.com/KhronosGroup/Vulkan-Headers/refs/heads/main/registry/vk.xml";

/// Where a registry document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    Path(PathBuf),
    Url(String),
}

impl RegistrySource {
    /// Classifies a location string. Anything carrying an http(s) scheme is
    /// fetched over the network, everything else is a filesystem path.
    pub fn locate(location: &str) -> RegistrySource {
        if location.starts_with("http://") || location.starts_with("https://") {
            RegistrySource::Url(location.to_owned())
        } else {
            RegistrySource::Path(PathBuf::from(location))
        }
    }

    /// Reads the complete document into memory. One shot, no retry: loading
    /// the registry is a rare, operator-triggered action.
    pub fn fetch(&self) -> Result<Vec<u8>, RegistryError> {
        match self {
            RegistrySource::Path(path) => {
                info!(path = %path.display(), "reading registry");
                fs::read(path).map_err(|cause| RegistryError::SourceFile {
                    path: path.clone(),
                    cause,
                })
            }
            RegistrySource::Url(url) => {
                info!(url = %url, "fetching registry");
                fetch_url(url).map_err(|cause| RegistryError::SourceFetch {
                    url: url.clone(),
                    cause,
                })
            }
        }
    }
}

fn fetch_url(url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}
