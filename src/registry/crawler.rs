//! Crawler that walks the vulkan xml event stream and collects the type
//! entries of the top-level `types` section into a registry.

use std::io::Read;

use boolinator::Boolinator;
use xml::attribute::OwnedAttribute;
use xml::reader::{Events, XmlEvent};

use super::{RegistryError, VkCategory, VkRegistry, VkTypeEntry};

pub fn crawl<R: Read>(xml_events: Events<R>, registry: &mut VkRegistry) -> Result<(), RegistryError> {
    // A stack of the local names of the currently open elements, root first.
    let mut vk_elements: Vec<String> = Vec::with_capacity(10);
    let mut saw_types = false;

    for event in xml_events {
        match event? {
            XmlEvent::StartElement { name, attributes, .. } => {
                let name = name.local_name;
                match vk_elements.as_slice() {
                    [_root] if name == "types" => saw_types = true,
                    // Only direct children of the top-level section count as
                    // entries; `type` elements nested any deeper do not.
                    [_root, section] if section == "types" && name == "type" => {
                        registry.push_type(VkTypeEntry {
                            category: VkCategory::from_attr(find_attribute(&attributes, "category")),
                            name: find_attribute(&attributes, "name").map(str::to_owned),
                        });
                    }
                    _ => (),
                }
                vk_elements.push(name);
            }

            XmlEvent::EndElement { .. } => {
                vk_elements.pop();
            }

            _ => (),
        }
    }

    Boolinator::ok_or(saw_types, RegistryError::MissingTypesSection)
}

fn find_attribute<'v>(source: &'v [OwnedAttribute], query: &str) -> Option<&'v str> {
    source
        .iter()
        .find(|attr| attr.name.local_name == query)
        .map(|attr| attr.value.as_str())
}
