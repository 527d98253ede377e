use std::fs::File;

use vk_convert_gen::{GenConfig, VkRegistry};

// Enough of a registry to drive one generation pass end to end. Point the
// binary at a real vk.xml for the full module.
const SAMPLE_VK_XML: &str = r#"<registry>
    <types>
        <type category="struct" name="VkExtent2D"/>
        <type category="struct" name="VkExtent3D"/>
        <type category="struct" name="VkBufferCreateInfo"/>
        <type category="struct" name="VkBufferCreateInfoKHR"/>
        <type category="handle" name="VkInstance"/>
        <type category="enum" name="VkResult"/>
    </types>
</registry>"#;

fn main() {
    VkRegistry::new(SAMPLE_VK_XML.as_bytes())
        .unwrap()
        .gen_convert(&mut File::create("vk_convert.rs").unwrap(), GenConfig::default())
        .unwrap();
}
