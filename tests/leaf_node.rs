//! Integration tests for the mesh leaf node lifecycle and appearance controls.
//!
//! ```bash
//! cargo test --test leaf_node
//! ```

mod common;

use std::sync::Arc;

use rstest::rstest;

use common::{png_bytes, Answer, TestContext};
use meshleaf::appearance::TEXTURE_UNIT;
use meshleaf::{Diagnostic, LeafConfig, MeshLeafNode, Severity};
use meshleaf_core::material::Face;
use meshleaf_core::state::{RenderBin, RenderMode, StateFlags};

fn ready_node(t: &TestContext) -> Arc<MeshLeafNode> {
    MeshLeafNode::create("arm", "arm.obj", t.context()).unwrap()
}

// ============================================================================
// Attachment
// ============================================================================

#[test]
fn construction_attaches_with_blend() {
    let t = TestContext::new(&["arm.obj"], Answer::BareMesh);
    let node = ready_node(&t);

    assert_eq!(node.name(), "arm");
    assert_eq!(node.group().num_children(), 1);
    assert!(node.group().contains_child(node.loaded_node()));
    let blend = node
        .loaded_node()
        .read_render_state(|s| s.mode(RenderMode::Blend));
    assert_eq!(blend, Some(Some(StateFlags::ON)));
}

#[test]
fn failed_construction_attaches_nothing() {
    let t = TestContext::new(&["arm.obj"], Answer::Empty);
    assert!(MeshLeafNode::create("arm", "arm.obj", t.context()).is_err());
    assert_eq!(t.loader.call_count(), 1);
}

#[test]
fn drop_detaches_once_with_aliases() {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    let node = ready_node(&t);
    let group = Arc::clone(node.group());
    let mesh = Arc::clone(node.loaded_node());

    // A second edge to the same mesh survives the drop.
    group.add_child(Arc::clone(&mesh));
    let alias = node.self_handle().unwrap();
    let alias2 = Arc::clone(&node);

    drop(node);
    drop(alias);
    assert_eq!(group.num_children(), 2);

    drop(alias2);
    assert_eq!(group.num_children(), 1);
    assert!(group.contains_child(&mesh));
}

#[test]
fn mesh_path_property_is_registered() {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    let node = ready_node(&t);

    let props = node.properties();
    assert!(props.has("Meshfile path"));
    assert_eq!(props.value("Meshfile path").unwrap().as_deref(), Some("arm.obj"));
    assert!(props.set_value("Meshfile path", "other.obj".into()).is_err());
}

#[test]
fn property_name_follows_config() {
    let mut config = LeafConfig::default();
    config.mesh_path_property = "Source".into();
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    let context = Arc::new(
        meshleaf::AssetContext::new(Arc::new(t.fs.clone()), t.loader.clone()).with_config(config),
    );

    let node = MeshLeafNode::create("arm", "arm.obj", context).unwrap();
    assert!(node.properties().has("Source"));
    assert!(!node.properties().has("Meshfile path"));
}

// ============================================================================
// Cloning
// ============================================================================

#[test]
fn clone_reloads_independently() {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    let node = ready_node(&t);
    node.set_alpha(0.5);

    let copy = node.clone_node().unwrap();
    assert_eq!(t.loader.call_count(), 2);
    assert_eq!(copy.name(), node.name());
    assert_eq!(copy.mesh_file_path(), "arm.obj");
    assert!(!Arc::ptr_eq(copy.loaded_node(), node.loaded_node()));
    assert!(!Arc::ptr_eq(copy.group(), node.group()));
    assert_eq!(copy.alpha(), None);
    assert_eq!(copy.render_bin(), Some(RenderBin::Default));

    let original_material = node.material();
    copy.set_color([1.0, 0.0, 0.0, 1.0]);
    assert_eq!(copy.color(), Some([1.0, 0.0, 0.0, 1.0]));
    assert_eq!(node.color(), None);
    assert_eq!(node.material(), original_material);
    assert_eq!(node.render_bin(), Some(RenderBin::Transparent));

    drop(copy);
    assert_eq!(node.group().num_children(), 1);
}

#[test]
fn clone_fails_when_file_disappears() {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    let node = ready_node(&t);
    t.fs.remove("arm.obj");

    assert!(matches!(
        node.clone_node(),
        Err(meshleaf::LoadError::FileNotFound { .. })
    ));
}

// ============================================================================
// Appearance
// ============================================================================

#[rstest]
#[case::opaque(0.0, RenderBin::Default)]
#[case::half(0.5, RenderBin::Transparent)]
#[case::full(1.0, RenderBin::Transparent)]
#[case::out_of_range(1.5, RenderBin::Transparent)]
fn alpha_selects_bin(#[case] alpha: f32, #[case] bin: RenderBin) {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    let node = ready_node(&t);
    node.set_alpha(alpha);

    assert_eq!(node.render_bin(), Some(bin));
    assert_eq!(node.alpha(), Some(alpha));
    let material = node.material().unwrap();
    assert_eq!(material.transparency(Face::Front), alpha);
    assert_eq!(material.transparency(Face::Back), alpha);
}

#[rstest]
#[case::color_first(true)]
#[case::alpha_first(false)]
fn color_and_alpha_commute(#[case] color_first: bool) {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    let node = ready_node(&t);
    let color = [0.8, 0.6, 0.4, 1.0];

    if color_first {
        node.set_color(color);
        node.set_alpha(0.25);
    } else {
        node.set_alpha(0.25);
        node.set_color(color);
    }

    let material = node.material().unwrap();
    for face in [Face::Front, Face::Back] {
        assert_eq!(material.diffuse(face), color);
        assert_eq!(material.ambient(face), [0.4, 0.3, 0.2, 1.0]);
        assert_eq!(material.transparency(face), 0.25);
    }
    assert_eq!(node.render_bin(), Some(RenderBin::Transparent));
}

#[test]
fn color_with_constructor() {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    let node =
        MeshLeafNode::create_with_color("arm", "arm.obj", [0.0, 0.0, 1.0, 1.0], t.context())
            .unwrap();
    assert_eq!(node.material().unwrap().diffuse(Face::Front), [0.0, 0.0, 1.0, 1.0]);
    assert_eq!(node.color(), Some([0.0, 0.0, 1.0, 1.0]));
}

#[test]
fn alpha_without_render_state_is_silent() {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    let node = ready_node(&t);
    node.loaded_node().set_render_state(None);

    node.set_alpha(0.5);
    assert!(node.alpha().is_none());
    assert!(node.render_bin().is_none());
    assert!(t.sink.is_empty());
}

#[test]
fn texture_binds_on_unit_zero() {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    t.fs.insert("wood.png", png_bytes(4, 4, [200, 150, 100, 255]));
    let node = ready_node(&t);

    node.set_texture("wood.png");
    assert_eq!(node.texture_file_path().as_deref(), Some("wood.png"));
    let size = node.loaded_node().read_render_state(|s| {
        s.texture(TEXTURE_UNIT)
            .filter(|b| b.is_enabled())
            .map(|b| (b.texture.width, b.texture.height))
    });
    assert_eq!(size, Some(Some((4, 4))));
}

#[rstest]
#[case::missing("missing.png")]
#[case::corrupt("corrupt.png")]
fn texture_failure_keeps_previous(#[case] bad: &str) {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    t.fs.insert("wood.png", png_bytes(2, 2, [1, 2, 3, 255]));
    t.fs.insert("corrupt.png", b"definitely not a png".to_vec());
    let node = ready_node(&t);
    node.set_texture("wood.png");

    node.set_texture(bad);
    assert_eq!(node.texture_file_path().as_deref(), Some("wood.png"));
    let bound = node
        .loaded_node()
        .read_render_state(|s| s.texture(TEXTURE_UNIT).and_then(|b| b.texture.name.clone()))
        .flatten();
    assert_eq!(bound.as_deref(), Some("wood.png"));

    assert_eq!(t.sink.count(Severity::Error), 1);
    assert!(matches!(
        &t.sink.diagnostics()[0],
        Diagnostic::TextureLoadFailed { path, .. } if path == bad
    ));
}

#[test]
fn texture_replaces_previous_binding() {
    let t = TestContext::new(&["arm.obj"], Answer::Mesh);
    t.fs.insert("a.png", png_bytes(1, 1, [0, 0, 0, 255]));
    t.fs.insert("b.png", png_bytes(2, 1, [0, 0, 0, 255]));
    let node = ready_node(&t);

    node.set_texture("a.png");
    node.set_texture("b.png");
    assert_eq!(node.texture_file_path().as_deref(), Some("b.png"));
    let units = node
        .loaded_node()
        .read_render_state(|s| s.texture_unit_count());
    assert_eq!(units, Some(1));
}
