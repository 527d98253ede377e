use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use vk_convert_gen::generator::HANDLE_CONVERSIONS;
use vk_convert_gen::{GenConfig, RegistryError, RegistrySource, VkRegistry};

fn generate(doc: &str, config: GenConfig) -> String {
    let registry = VkRegistry::new(doc.as_bytes()).unwrap();
    let mut out = Vec::new();
    registry.gen_convert(&mut out, config).unwrap();
    String::from_utf8(out).unwrap()
}

/// Audit comments are the only plain `//` lines indented into the module.
fn audit_lines(output: &str) -> Vec<&str> {
    output.lines().filter(|line| line.starts_with("    // ")).collect()
}

fn macro_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.starts_with("    vk_c_convert!("))
        .collect()
}

const SCENARIO: &str = r#"<registry>
    <types>
        <type category="struct" name="VkBufferCreateInfo"/>
        <type category="struct" name="VkBufferCreateInfoKHR"/>
        <type category="handle" name="VkDevice"/>
        <type category="enum" name="VkResult"/>
    </types>
</registry>"#;

#[test]
fn scenario_registry_audits_and_includes_per_policy() {
    let output = generate(SCENARIO, GenConfig::default());

    assert_eq!(
        audit_lines(&output),
        [
            "    // struct VkBufferCreateInfo",
            "    // struct VkBufferCreateInfoKHR",
            "    // handle VkDevice",
        ]
    );

    let expected: Vec<String> = [
        "    vk_c_convert!(vk::BufferCreateInfo, VkBufferCreateInfo);".to_owned(),
        "    vk_c_convert!(vk::Device, VkDevice);".to_owned(),
    ]
    .into_iter()
    .chain(
        HANDLE_CONVERSIONS
            .iter()
            .map(|(wrapper, c_name)| format!("    vk_c_convert!(vk::{wrapper}, {c_name});")),
    )
    .collect();
    assert_eq!(macro_lines(&output), expected);

    // The foreign-category entry leaves no trace, not even an audit line.
    assert!(!output.contains("VkResult"));
}

#[test]
fn classified_entries_are_audited_exactly_once_in_document_order() {
    let output = generate(SCENARIO, GenConfig::default());
    let audits = audit_lines(&output);
    assert_eq!(
        audits
            .iter()
            .filter(|&&line| line == "    // struct VkBufferCreateInfo")
            .count(),
        1
    );
    let khr = audits
        .iter()
        .position(|line| *line == "    // struct VkBufferCreateInfoKHR")
        .unwrap();
    let device = audits.iter().position(|line| *line == "    // handle VkDevice").unwrap();
    assert!(khr < device);
}

#[test]
fn anonymous_handle_blocks_leave_no_trace() {
    let output = generate(
        r#"<registry>
            <types>
                <type category="handle"><type>VK_DEFINE_HANDLE</type>(<name>VkInstance</name>)</type>
                <type category="struct" name="VkExtent2D"/>
            </types>
        </registry>"#,
        GenConfig::default(),
    );
    // The name lives in a child element, not the `name` attribute, so the
    // entry is anonymous; the nested elements are not entries of their own.
    assert!(!output.contains("VkInstance"));
    assert_eq!(audit_lines(&output), ["    // struct VkExtent2D"]);
}

#[test]
fn reruns_are_byte_identical() {
    let registry = VkRegistry::new(SCENARIO.as_bytes()).unwrap();
    let (mut first, mut second) = (Vec::new(), Vec::new());
    registry.gen_convert(&mut first, GenConfig::default()).unwrap();
    registry.gen_convert(&mut second, GenConfig::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn output_opens_with_the_scaffold_and_closes_with_the_alias() {
    let output = generate(SCENARIO, GenConfig::default());
    assert!(output.starts_with("// Generated by vk_convert_gen."));
    let module = output.find("pub mod vk_convert {").unwrap();
    let the_macro = output.find("macro_rules! vk_c_convert").unwrap();
    let first_audit = output.find("    // struct VkBufferCreateInfo").unwrap();
    assert!(module < the_macro && the_macro < first_audit);
    assert!(output.ends_with("pub use self::vk_convert::VkCConvert as Vkc;\n"));
}

#[test]
fn handle_pairs_come_after_the_swept_entries() {
    let output = generate(SCENARIO, GenConfig::default());
    let swept = output.find("vk_c_convert!(vk::BufferCreateInfo,").unwrap();
    let first_handle = output.find("vk_c_convert!(vk::BufferView,").unwrap();
    let close = output.rfind('}').unwrap();
    assert!(swept < first_handle && first_handle < close);
}

#[test]
fn policy_is_supplied_by_the_configuration() {
    let config = GenConfig {
        type_prefix: "Xr",
        wrapper_namespace: "xr",
        excluded_types: &["XrBad"],
        excluded_suffixes: &["TAG"],
    };
    let output = generate(
        r#"<registry>
            <types>
                <type category="struct" name="XrThing"/>
                <type category="struct" name="XrBad"/>
                <type category="struct" name="XrThingTAG"/>
                <type category="struct" name="VkDevice"/>
            </types>
        </registry>"#,
        config,
    );

    assert_eq!(
        audit_lines(&output),
        [
            "    // struct XrThing",
            "    // struct XrBad",
            "    // struct XrThingTAG",
            "    // struct VkDevice",
        ]
    );
    // Only XrThing survives the sweep; the hand-listed pairs stay fixed but
    // follow the configured namespace.
    let expected: Vec<String> = ["    vk_c_convert!(xr::Thing, XrThing);".to_owned()]
        .into_iter()
        .chain(
            HANDLE_CONVERSIONS
                .iter()
                .map(|(wrapper, c_name)| format!("    vk_c_convert!(xr::{wrapper}, {c_name});")),
        )
        .collect();
    assert_eq!(macro_lines(&output), expected);
}

#[test]
fn unreachable_source_fails_without_output() {
    let missing = PathBuf::from("does/not/exist/vk.xml");
    let err = VkRegistry::load(&RegistrySource::Path(missing)).unwrap_err();
    assert!(matches!(err, RegistryError::SourceFile { .. }));
    assert!(err.to_string().contains("does/not/exist/vk.xml"));
}

#[test]
fn registry_without_types_section_fails_before_emission() {
    let err = VkRegistry::new(b"<registry><commands/></registry>").unwrap_err();
    assert!(matches!(err, RegistryError::MissingTypesSection));
}

fn wrapper_stubs(extra: &str) -> String {
    let mut module = String::from("mod vk {\n");
    for (wrapper, _) in HANDLE_CONVERSIONS {
        module.push_str(&format!("    pub struct {wrapper}(pub u64);\n"));
    }
    module.push_str(extra);
    module.push_str("}\n");
    module
}

fn raw_stubs(extra: &str) -> String {
    let mut items = String::new();
    for (_, c_name) in HANDLE_CONVERSIONS {
        items.push_str(&format!("pub struct {c_name}(pub u64);\n"));
    }
    items.push_str(extra);
    items
}

fn compile(source: &str) -> Output {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("harness.rs"), source).unwrap();
    Command::new("rustc")
        .current_dir(dir.path())
        .args(["--edition", "2021", "harness.rs"])
        .output()
        .unwrap()
}

#[test]
fn generated_module_compiles_against_layout_compatible_types() {
    let generated = generate(
        r#"<registry>
            <types>
                <type category="struct" name="VkExtent2D"/>
                <type category="struct" name="VkOffset2D"/>
                <type category="struct" name="VkExtent2DKHR"/>
                <type category="enum" name="VkResult"/>
            </types>
        </registry>"#,
        GenConfig::default(),
    );

    let harness = format!(
        "#![allow(dead_code)]\n\n{wrappers}\n{raws}\n{generated}\n\
         fn main() {{\n    \
             let extent = vk::Extent2D(4, 4);\n    \
             let raw: &VkExtent2D = extent.convert();\n    \
             assert!(raw.0 == 4);\n\
         }}\n",
        wrappers = wrapper_stubs(
            "    pub struct Extent2D(pub u32, pub u32);\n    pub struct Offset2D(pub i32, pub i32);\n"
        ),
        raws = raw_stubs(
            "pub struct VkExtent2D(pub u32, pub u32);\npub struct VkOffset2D(pub i32, pub i32);\n"
        ),
    );

    let output = compile(&harness);
    assert!(
        output.status.success(),
        "rustc rejected the generated module:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn layout_mismatch_fails_the_downstream_build() {
    let generated = generate(
        r#"<registry>
            <types>
                <type category="struct" name="VkExtent2D"/>
            </types>
        </registry>"#,
        GenConfig::default(),
    );

    let harness = format!(
        "#![allow(dead_code)]\n\n{wrappers}\n{raws}\n{generated}\nfn main() {{}}\n",
        wrappers = wrapper_stubs("    pub struct Extent2D(pub u32);\n"),
        raws = raw_stubs("pub struct VkExtent2D(pub u64);\n"),
    );

    let output = compile(&harness);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("size mismatch between"), "stderr was:\n{stderr}");
}
