//! Descriptor and registry behavior across node kinds.

use std::sync::Arc;
use std::thread;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::props::downcast_props;
use crate::{
    ComponentDescriptor, ComponentDescriptorProvider, ComponentDescriptorRegistry,
    ConcreteComponentDescriptor, ConcreteShadowNode, Error, PropsError, RawProps, RegistryError,
    RegistryOptions, ShadowNodeData, ShadowNodeError, ShadowNodeFamily,
    ShadowNodeFamilyFragment, ShadowNodeFragment, ShadowNodeHandle, SharedProps,
};

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ViewProps {
    opacity: f32,
    test_id: String,
}

#[derive(Debug)]
struct ViewShadowNode(ShadowNodeData<ViewProps, ()>);

impl ConcreteShadowNode for ViewShadowNode {
    const NAME: &'static str = "View";
    type Props = ViewProps;
    type State = ();

    fn from_data(data: ShadowNodeData<ViewProps, ()>) -> Self {
        Self(data)
    }

    fn data(&self) -> &ShadowNodeData<ViewProps, ()> {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct CounterProps {
    start: i64,
}

#[derive(Debug, Clone, PartialEq)]
struct CounterState {
    count: i64,
}

#[derive(Debug)]
struct CounterShadowNode(ShadowNodeData<CounterProps, CounterState>);

impl ConcreteShadowNode for CounterShadowNode {
    const NAME: &'static str = "Counter";
    type Props = CounterProps;
    type State = CounterState;

    fn from_data(data: ShadowNodeData<CounterProps, CounterState>) -> Self {
        Self(data)
    }

    fn data(&self) -> &ShadowNodeData<CounterProps, CounterState> {
        &self.0
    }

    fn initial_state(props: &CounterProps, _family: &ShadowNodeFamily) -> Option<CounterState> {
        Some(CounterState { count: props.start })
    }
}

type ViewComponentDescriptor = ConcreteComponentDescriptor<ViewShadowNode>;
type CounterComponentDescriptor = ConcreteComponentDescriptor<CounterShadowNode>;

fn view_props(node: &ShadowNodeHandle) -> ViewProps {
    node.props()
        .downcast_ref::<ViewProps>()
        .cloned()
        .expect("view props")
}

fn create_view(descriptor: &ViewComponentDescriptor, tag: i32) -> ShadowNodeHandle {
    let family = descriptor.create_family(ShadowNodeFamilyFragment::new(tag, 1));
    descriptor
        .create_shadow_node(ShadowNodeFragment::new(), family)
        .expect("view node")
}

// ============================================================================
// Descriptor
// ============================================================================

#[test]
fn test_create_uses_defaults() {
    let descriptor = ViewComponentDescriptor::new();
    let node = create_view(&descriptor, 7);

    assert_eq!(descriptor.component_name(), "View");
    assert_eq!(node.component_name(), "View");
    assert_eq!(node.component_handle(), descriptor.component_handle());
    assert_eq!(node.tag(), 7);
    assert_eq!(node.family().surface_id(), 1);
    assert_eq!(view_props(&node), ViewProps::default());
    assert!(node.children().is_empty());
    assert!(node.state().is_none());
    assert!(node.downcast_ref::<ViewShadowNode>().is_some());
}

#[test]
fn test_clone_without_overrides_shares_everything() {
    let descriptor = ViewComponentDescriptor::new();
    let family = descriptor.create_family(ShadowNodeFamilyFragment::new(1, 1));
    let child = create_view(&descriptor, 2);
    let original = descriptor
        .create_shadow_node(
            ShadowNodeFragment::new()
                .props(ViewProps {
                    opacity: 0.5,
                    test_id: "root".into(),
                })
                .children(vec![child]),
            family,
        )
        .unwrap();

    let clone = descriptor
        .clone_shadow_node(original.as_ref(), ShadowNodeFragment::new())
        .unwrap();

    assert!(!Arc::ptr_eq(&original, &clone));
    assert!(clone.same_family(original.as_ref()));
    assert!(Arc::ptr_eq(&original.props(), &clone.props()));
    assert!(Arc::ptr_eq(original.children(), clone.children()));
    assert_eq!(view_props(&original), view_props(&clone));
}

#[test]
fn test_clone_with_props_leaves_source_untouched() {
    let descriptor = ViewComponentDescriptor::new();
    let original = create_view(&descriptor, 3);

    let replacement = ViewProps {
        opacity: 1.0,
        test_id: "clone".into(),
    };
    let clone = descriptor
        .clone_shadow_node(
            original.as_ref(),
            ShadowNodeFragment::new().props(replacement.clone()),
        )
        .unwrap();

    assert_eq!(view_props(&original), ViewProps::default());
    assert_eq!(view_props(&clone), replacement);
    assert!(Arc::ptr_eq(original.family(), clone.family()));
}

#[test]
fn test_clone_with_children_and_state() {
    let descriptor = CounterComponentDescriptor::new();
    let family = descriptor.create_family(ShadowNodeFamilyFragment::new(10, 1));
    let original = descriptor
        .create_shadow_node(ShadowNodeFragment::new().props(CounterProps { start: 4 }), family)
        .unwrap();

    let state = original.state().unwrap();
    assert_eq!(
        state.downcast_ref::<CounterState>(),
        Some(&CounterState { count: 4 })
    );

    let child = descriptor
        .create_shadow_node(
            ShadowNodeFragment::new(),
            descriptor.create_family(ShadowNodeFamilyFragment::new(11, 1)),
        )
        .unwrap();
    let clone = descriptor
        .clone_shadow_node(
            original.as_ref(),
            ShadowNodeFragment::new()
                .state(CounterState { count: 5 })
                .children(vec![child]),
        )
        .unwrap();

    assert_eq!(clone.children().len(), 1);
    assert!(original.children().is_empty());
    assert_eq!(
        clone.state().unwrap().downcast_ref::<CounterState>(),
        Some(&CounterState { count: 5 })
    );
    assert_eq!(
        original.state().unwrap().downcast_ref::<CounterState>(),
        Some(&CounterState { count: 4 })
    );
    assert!(Arc::ptr_eq(&original.props(), &clone.props()));
}

#[test]
fn test_same_node_type_under_two_names() {
    let view = ViewComponentDescriptor::new();
    let alias = ViewComponentDescriptor::with_name("ViewAlias");

    assert_ne!(view.component_name(), alias.component_name());
    assert_ne!(view.component_handle(), alias.component_handle());

    let family = alias.create_family(ShadowNodeFamilyFragment::new(1, 1));
    let error = view
        .create_shadow_node(ShadowNodeFragment::new(), family)
        .unwrap_err();
    assert!(matches!(error, ShadowNodeError::ComponentMismatch { .. }));
}

#[test]
fn test_clone_rejects_other_kinds() {
    let view = ViewComponentDescriptor::new();
    let counter = CounterComponentDescriptor::new();
    let node = create_view(&view, 1);

    let error = counter
        .clone_shadow_node(node.as_ref(), ShadowNodeFragment::new())
        .unwrap_err();
    match error {
        ShadowNodeError::ComponentMismatch { expected, found } => {
            assert_eq!(expected, "Counter");
            assert_eq!(found, "View");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_override_type_mismatch() {
    let view = ViewComponentDescriptor::new();
    let node = create_view(&view, 1);

    let error = view
        .clone_shadow_node(
            node.as_ref(),
            ShadowNodeFragment::new().props(CounterProps::default()),
        )
        .unwrap_err();
    assert!(matches!(error, ShadowNodeError::PropsTypeMismatch { .. }));

    let error = view
        .clone_shadow_node(
            node.as_ref(),
            ShadowNodeFragment::new().state(CounterState { count: 0 }),
        )
        .unwrap_err();
    assert!(matches!(error, ShadowNodeError::StateTypeMismatch { .. }));
}

#[test]
fn test_clone_props() {
    let view = ViewComponentDescriptor::new();

    let parsed = view
        .clone_props(None, &RawProps::new().with("testId", "header"))
        .unwrap();
    assert_eq!(
        parsed.downcast_ref::<ViewProps>().unwrap().test_id,
        "header"
    );

    let unchanged = view.clone_props(Some(&parsed), &RawProps::new()).unwrap();
    assert!(Arc::ptr_eq(&parsed, &unchanged));

    let overlaid = view
        .clone_props(Some(&parsed), &RawProps::new().with("opacity", 0.25))
        .unwrap();
    let overlaid = downcast_props::<ViewProps>(&overlaid).unwrap();
    assert_eq!(overlaid.test_id, "header");
    assert_eq!(overlaid.opacity, 0.25);

    let error = view
        .clone_props(None, &RawProps::new().with("opacity", "opaque"))
        .unwrap_err();
    assert!(matches!(error, PropsError::Malformed { .. }));

    let foreign: SharedProps = Arc::new(CounterProps::default());
    let error = view.clone_props(Some(&foreign), &RawProps::new()).unwrap_err();
    assert!(matches!(error, PropsError::TypeMismatch { .. }));
}

#[test]
fn test_create_initial_state() {
    let counter = CounterComponentDescriptor::new();
    let family = counter.create_family(ShadowNodeFamilyFragment::new(1, 1));
    let props = counter
        .clone_props(None, &RawProps::new().with("start", 9))
        .unwrap();

    let state = counter.create_initial_state(&props, &family).unwrap().unwrap();
    assert_eq!(
        state.downcast_ref::<CounterState>(),
        Some(&CounterState { count: 9 })
    );

    let view = ViewComponentDescriptor::new();
    let view_props = view.clone_props(None, &RawProps::new()).unwrap();
    assert!(view.create_initial_state(&view_props, &family).unwrap().is_none());
}

// ============================================================================
// Registry
// ============================================================================

fn registry() -> ComponentDescriptorRegistry {
    let mut registry = ComponentDescriptorRegistry::new();
    registry.register::<ViewShadowNode>().unwrap();
    registry
        .add_provider(&ComponentDescriptorProvider::of::<CounterShadowNode>())
        .unwrap();
    registry
}

#[test]
fn test_registry_lookup() {
    let registry = registry();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("View"));
    assert!(registry.contains("Counter"));

    let view = registry.get("View").unwrap();
    assert_eq!(view.component_name(), "View");
    let by_handle = registry.get_by_handle(view.component_handle()).unwrap();
    assert!(Arc::ptr_eq(view, by_handle));
}

#[test]
fn test_registry_rejects_duplicates() {
    let mut registry = registry();

    let error = registry.register::<ViewShadowNode>().unwrap_err();
    assert_eq!(
        error,
        RegistryError::Duplicate {
            name: "View".into()
        }
    );

    let error = registry
        .add_provider(&ComponentDescriptorProvider::of::<CounterShadowNode>())
        .unwrap_err();
    assert!(matches!(error, RegistryError::Duplicate { .. }));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_registry_unknown_component() {
    let registry = registry();

    let error = registry.get("Slider").unwrap_err();
    assert_eq!(
        error,
        RegistryError::Unregistered {
            name: "Slider".into()
        }
    );
    assert!(registry.fallback().is_none());
}

#[test]
fn test_registry_fallback() {
    let mut registry = ComponentDescriptorRegistry::with_options(RegistryOptions {
        fallback: Some("View".into()),
    });
    registry.register::<ViewShadowNode>().unwrap();

    let descriptor = registry.get("Slider").unwrap();
    assert_eq!(descriptor.component_name(), "View");

    let handle = ComponentDescriptorProvider::of::<CounterShadowNode>().handle();
    let descriptor = registry.get_by_handle(handle).unwrap();
    assert_eq!(descriptor.component_name(), "View");
}

#[test]
fn test_registry_options_deserialize() {
    let options: RegistryOptions =
        serde_json::from_value(json!({ "fallback": "UnimplementedView" })).unwrap();
    assert_eq!(options.fallback.as_deref(), Some("UnimplementedView"));

    let options: RegistryOptions = serde_json::from_value(json!({})).unwrap();
    assert_eq!(options, RegistryOptions::default());
}

#[test]
fn test_registry_create_node() {
    let registry = registry();

    let node = registry
        .create_node(
            "Counter",
            ShadowNodeFamilyFragment::new(5, 2),
            &RawProps::new().with("start", 3),
        )
        .unwrap();
    assert_eq!(node.component_name(), "Counter");
    assert_eq!(node.tag(), 5);
    assert_eq!(
        node.state().unwrap().downcast_ref::<CounterState>(),
        Some(&CounterState { count: 3 })
    );

    let error = registry
        .create_node("Counter", ShadowNodeFamilyFragment::new(6, 2), &RawProps::new().with("start", "x"))
        .unwrap_err();
    assert!(matches!(error, Error::Props(PropsError::Malformed { .. })));

    let error = registry
        .create_node("Slider", ShadowNodeFamilyFragment::new(7, 2), &RawProps::new())
        .unwrap_err();
    assert!(matches!(error, Error::Registry(RegistryError::Unregistered { .. })));
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = Arc::new(registry());

    let nodes: Vec<ShadowNodeHandle> = thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|tag| {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    let descriptor = registry.get("View").unwrap();
                    let node = registry
                        .create_node("View", ShadowNodeFamilyFragment::new(tag, 1), &RawProps::new())
                        .unwrap();
                    descriptor
                        .clone_shadow_node(
                            node.as_ref(),
                            ShadowNodeFragment::new().props(ViewProps {
                                opacity: 1.0,
                                test_id: format!("worker-{tag}"),
                            }),
                        )
                        .unwrap()
                })
            })
            .collect();
        workers.into_iter().map(|worker| worker.join().unwrap()).collect()
    });

    assert_eq!(nodes.len(), 4);
    for (tag, node) in (0..).zip(&nodes) {
        assert_eq!(node.tag(), tag);
        assert_eq!(view_props(node).test_id, format!("worker-{tag}"));
    }
}
